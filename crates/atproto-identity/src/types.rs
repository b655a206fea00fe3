use serde::{Deserialize, Serialize};

/// Bluesky profile as returned by `app.bsky.actor.getProfile`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub did: String,
    pub handle: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub followers_count: Option<u64>,
    pub follows_count: Option<u64>,
    pub posts_count: Option<u64>,
}

/// Bluesky API response type
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    pub(crate) did: String,
    pub(crate) handle: String,
    pub(crate) display_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) avatar: Option<String>,
    pub(crate) banner: Option<String>,
    pub(crate) followers_count: Option<u64>,
    pub(crate) follows_count: Option<u64>,
    pub(crate) posts_count: Option<u64>,
}

impl From<ProfileResponse> for Profile {
    fn from(data: ProfileResponse) -> Self {
        Profile {
            did: data.did,
            handle: data.handle,
            display_name: data.display_name,
            description: data.description,
            avatar: data.avatar,
            banner: data.banner,
            followers_count: data.followers_count,
            follows_count: data.follows_count,
            posts_count: data.posts_count,
        }
    }
}
