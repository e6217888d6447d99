use crate::gallery::api::fetch_videos;
use crate::gallery::category::Category;
use crate::gallery::state::{card_key, GalleryAction, GalleryState};
use crate::models::MergedVideo;
use crate::utils::{format_count, format_iso8601_duration, format_publish_date, watch_url};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

/// `/videos?category=science` opens the gallery pre-filtered.
#[derive(Debug, Deserialize)]
struct GalleryQuery {
    category: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub selected: Category,
    pub counts: Vec<(Category, usize)>,
    pub on_select: Callback<Category>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: MergedVideo,
    pub position: usize,
    pub hovered: bool,
    pub on_hover: Callback<Option<usize>>,
}

#[function_component(VideoGalleryPage)]
pub fn video_gallery_page() -> Html {
    let initial_category = use_location()
        .and_then(|location| location.query::<GalleryQuery>().ok())
        .and_then(|query| query.category)
        .and_then(|key| Category::from_key(&key))
        .unwrap_or_default();
    let gallery = use_reducer(move || GalleryState {
        category: initial_category,
        ..GalleryState::default()
    });

    // Load once on mount; a page reload is the only retry.
    {
        let gallery = gallery.clone();
        use_effect_with((), move |_| {
            gallery.dispatch(GalleryAction::StartLoading);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos().await {
                    Ok(videos) => gallery.dispatch(GalleryAction::Loaded(videos)),
                    Err(e) => gallery.dispatch(GalleryAction::Failed(e)),
                }
            });
            || ()
        });
    }

    let on_select = {
        let gallery = gallery.clone();
        Callback::from(move |category: Category| {
            gallery.dispatch(GalleryAction::SelectCategory(category));
        })
    };

    let on_hover = {
        let gallery = gallery.clone();
        Callback::from(move |position: Option<usize>| match position {
            Some(position) => gallery.dispatch(GalleryAction::Hover(position)),
            None => gallery.dispatch(GalleryAction::Unhover),
        })
    };

    let visible = gallery.visible_entries();

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-6xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-3xl font-bold text-gray-800 mb-6">
                        {"Videos"}
                    </h1>

                    <CategoryFilter
                        selected={gallery.category}
                        counts={gallery.category_counts()}
                        on_select={on_select}
                    />

                    {
                        if let Some(msg) = &gallery.error {
                            html! {
                                <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                                    { msg }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }

                    {
                        if gallery.loading {
                            html! {
                                <div class="text-center py-8">
                                    <p>{"Loading videos..."}</p>
                                </div>
                            }
                        } else if visible.is_empty() && gallery.error.is_none() {
                            html! {
                                <p class="text-center text-gray-500 py-8">{"No videos in this category yet."}</p>
                            }
                        } else {
                            html! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                    { for visible.into_iter().map(|(position, video)| html! {
                                        <VideoCard
                                            key={card_key(position, video)}
                                            video={video.clone()}
                                            position={position}
                                            hovered={gallery.is_hovered(position)}
                                            on_hover={on_hover.clone()}
                                        />
                                    })}
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2 mb-6">
            { for props.counts.iter().map(|(category, count)| {
                let category = *category;
                let class = if category == props.selected {
                    "px-4 py-2 text-sm rounded bg-blue-600 text-white"
                } else {
                    "px-4 py-2 text-sm rounded bg-gray-200 text-gray-800 hover:bg-gray-300"
                };
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(category))
                };
                html! {
                    <button {class} {onclick} data-category={category.key()}>
                        { format!("{} ({count})", category.display_name()) }
                    </button>
                }
            })}
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let position = props.position;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(position)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    let card_class = if props.hovered {
        "bg-gray-100 rounded-lg overflow-hidden shadow-lg scale-105 transition"
    } else {
        "bg-gray-100 rounded-lg overflow-hidden shadow transition"
    };

    html! {
        <div class={card_class} {onmouseenter} {onmouseleave}>
            <a href={watch_url(&video.id)} target="_blank" rel="noopener noreferrer">
                <div class="relative">
                    <img src={video.thumbnail_url.clone()} alt={video.title.clone()} class="w-full" />
                    <span class="absolute bottom-2 right-2 bg-black bg-opacity-75 text-white text-xs px-2 py-1 rounded">
                        { format_iso8601_duration(video.duration.as_deref()) }
                    </span>
                </div>
            </a>
            <div class="p-4">
                <h3 class="text-lg font-semibold text-gray-800 mb-2">
                    <a href={watch_url(&video.id)} target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">
                        { &video.title }
                    </a>
                </h3>
                <div class="text-sm text-gray-600 flex flex-wrap gap-4">
                    <p class="flex items-center">{"📅 "}<span>{ format_publish_date(&video.published_at) }</span></p>
                    <p class="flex items-center">{"👁️ "}<span>{ format_count(video.view_count.unwrap_or(0)) }</span></p>
                    <p class="flex items-center">{"👍 "}<span>{ format_count(video.like_count.unwrap_or(0)) }</span></p>
                    <p class="flex items-center">{"💬 "}<span>{ format_count(video.comment_count.unwrap_or(0)) }</span></p>
                </div>
            </div>
        </div>
    }
}
