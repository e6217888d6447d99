use crate::models::MergedVideo;

/// Fixed gallery filters. Every variant except `All` is matched against a
/// video's tags by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Tutorials,
    Recovery,
    Science,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Tutorials => "Tutorials",
            Category::Recovery => "Recovery",
            Category::Science => "Science",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Tutorials => "tutorials",
            Category::Recovery => "recovery",
            Category::Science => "science",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Category::All),
            "tutorials" => Some(Category::Tutorials),
            "recovery" => Some(Category::Recovery),
            "science" => Some(Category::Science),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            Category::All,
            Category::Tutorials,
            Category::Recovery,
            Category::Science,
        ]
    }

    pub fn matches(&self, video: &MergedVideo) -> bool {
        match self {
            Category::All => true,
            _ => video.has_tag(self.key()),
        }
    }
}
