use crate::gallery::category::Category;
use crate::models::MergedVideo;
use std::rc::Rc;
use yew::Reducible;

/// View state of the gallery page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub videos: Vec<MergedVideo>,
    pub loading: bool,
    pub error: Option<String>,
    pub category: Category,
    /// Position in `videos` of the hovered card. Ids can repeat, positions can't.
    pub hovered: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    StartLoading,
    Loaded(Vec<MergedVideo>),
    Failed(String),
    SelectCategory(Category),
    Hover(usize),
    Unhover,
}

impl GalleryState {
    pub fn apply(&self, action: GalleryAction) -> Self {
        match action {
            GalleryAction::StartLoading => Self {
                loading: true,
                error: None,
                ..self.clone()
            },
            GalleryAction::Loaded(videos) => Self {
                videos,
                loading: false,
                error: None,
                hovered: None,
                ..self.clone()
            },
            GalleryAction::Failed(error) => Self {
                loading: false,
                error: Some(error),
                ..self.clone()
            },
            GalleryAction::SelectCategory(category) => Self {
                category,
                ..self.clone()
            },
            GalleryAction::Hover(position) => Self {
                hovered: Some(position),
                ..self.clone()
            },
            GalleryAction::Unhover => Self {
                hovered: None,
                ..self.clone()
            },
        }
    }

    /// Visible videos paired with their position in `videos`, which is what
    /// cards are keyed and hovered by.
    pub fn visible_entries(&self) -> Vec<(usize, &MergedVideo)> {
        self.videos
            .iter()
            .enumerate()
            .filter(|(_, video)| self.category.matches(video))
            .collect()
    }

    pub fn is_hovered(&self, position: usize) -> bool {
        self.hovered == Some(position)
    }

    /// How many videos each filter button would show.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::all_variants()
            .into_iter()
            .map(|category| {
                let count = filter_by_category(&self.videos, category).len();
                (category, count)
            })
            .collect()
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Render key of a card. Search results may repeat an id, so the position
/// keeps keys unique within the list.
pub fn card_key(position: usize, video: &MergedVideo) -> String {
    format!("{position}-{}", video.id)
}

/// Videos tagged with `category`, in their original order. `All` keeps every
/// video.
pub fn filter_by_category(videos: &[MergedVideo], category: Category) -> Vec<&MergedVideo> {
    videos.iter().filter(|video| category.matches(video)).collect()
}
