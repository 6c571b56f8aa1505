//! Profile screen data
//!
//! The profile tab currently renders a fixed showcase account.

use auth_client::UserRecord;
use serde::Serialize;

/// Story highlight bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Stable key
    pub id: &'static str,
    /// Caption
    pub title: &'static str,
    /// Emoji shown in the bubble
    pub icon: &'static str,
}

/// Post grid tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostTile {
    /// Stable key
    pub id: &'static str,
    /// Bundled image asset
    pub image: &'static str,
}

/// Profile header, highlights and post grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseProfile {
    /// Owner uid
    pub uid: &'static str,
    /// Handle, shown with a leading `@`
    pub username: &'static str,
    /// Avatar URL
    pub profile_image: &'static str,
    /// Post count, preformatted
    pub posts: &'static str,
    /// Follower count, preformatted
    pub followers: &'static str,
    /// Following count, preformatted
    pub following: &'static str,
    /// Bio line
    pub bio: &'static str,
    /// Highlight bubbles in display order
    pub highlights: &'static [Highlight],
    /// Post grid tiles in display order
    pub post_images: &'static [PostTile],
}

/// Columns in the post grid
pub const POST_GRID_COLUMNS: usize = 2;

/// The account shown on the profile tab
pub static SHOWCASE_PROFILE: ShowcaseProfile = ShowcaseProfile {
    uid: "12345",
    username: "nasa",
    profile_image: "https://upload.wikimedia.org/wikipedia/commons/e/e5/NASA_logo.svg",
    posts: "3,946",
    followers: "95.3M",
    following: "77",
    bio: "🚀🌍 Exploring the universe and our home planet.",
    highlights: &[
        Highlight { id: "1", title: "Join Us", icon: "📋" },
        Highlight { id: "2", title: "Wallpapers", icon: "📱" },
        Highlight { id: "3", title: "Follow", icon: "💙" },
        Highlight { id: "4", title: "Missions", icon: "🛰️" },
    ],
    post_images: &[
        PostTile { id: "1", image: "images/five.jpeg" },
        PostTile { id: "2", image: "images/five.jpeg" },
        PostTile { id: "3", image: "images/five.jpeg" },
        PostTile { id: "4", image: "images/five.jpeg" },
    ],
};

impl ShowcaseProfile {
    /// Handle with its `@` prefix
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// Whether `user` owns this profile
    pub fn is_current_user(&self, user: Option<&UserRecord>) -> bool {
        user.is_some_and(|u| u.uid == self.uid)
    }

    /// Post tiles split into grid rows
    pub fn post_rows(&self) -> impl Iterator<Item = &'static [PostTile]> {
        self.post_images.chunks(POST_GRID_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_header() {
        assert_eq!(SHOWCASE_PROFILE.handle(), "@nasa");
        assert_eq!(SHOWCASE_PROFILE.followers, "95.3M");
        assert_eq!(SHOWCASE_PROFILE.highlights.len(), 4);
        assert_eq!(SHOWCASE_PROFILE.highlights[3].title, "Missions");
    }

    #[test]
    fn test_is_current_user() {
        let owner = UserRecord::new("12345", "nasa@example.com");
        let other = UserRecord::new("u1", "a@b.com");

        assert!(SHOWCASE_PROFILE.is_current_user(Some(&owner)));
        assert!(!SHOWCASE_PROFILE.is_current_user(Some(&other)));
        assert!(!SHOWCASE_PROFILE.is_current_user(None));
    }

    #[test]
    fn test_post_grid_rows() {
        let rows: Vec<_> = SHOWCASE_PROFILE.post_rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == POST_GRID_COLUMNS));
    }
}
