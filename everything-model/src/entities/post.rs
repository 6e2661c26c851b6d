use crate::entity::Schema;
use crate::markdown::{MarkdownPair, MarkdownSync};
use crate::merge::Partial;
use everything_types::Kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

schema! {
    /// Fields shared by submissions ([`Post`]) and replies ([`Comment`](crate::Comment)).
    pub base struct PostBase {
        pub approved_at_utc: Option<f64> = None,
        pub subreddit: Option<String> = Some(String::new()),
        pub user_reports: Option<Vec<Value>> = Some(Vec::new()),
        pub saved: Option<bool> = Some(false),
        pub mod_reason_title: Option<String> = None,
        pub gilded: Option<i64> = Some(0),
        pub subreddit_name_prefixed: Option<String> = Some(String::new()),
        pub downs: Option<i64> = Some(0),
        pub top_awarded_type: Option<String> = None,
        pub name: Option<String> = Some(String::new()),
        pub author_flair_background_color: Option<String> = Some(String::new()),
        pub subreddit_type: Option<String> = Some("public".to_string()),
        pub ups: Option<i64> = Some(0),
        pub total_awards_received: Option<i64> = Some(0),
        pub author_flair_template_id: Option<String> = None,
        pub author_fullname: Option<String> = Some(String::new()),
        pub can_mod_post: Option<bool> = Some(false),
        pub score: Option<i64> = Some(0),
        pub approved_by: Option<String> = None,
        pub author_premium: Option<bool> = Some(false),
        pub edited: Option<Edited> = Some(Edited::default()),
        pub author_flair_css_class: Option<String> = Some(String::new()),
        pub author_flair_richtext: Option<Vec<Value>> = Some(Vec::new()),
        pub gildings: Option<Partial> = Some(Partial::new()),
        pub mod_note: Option<String> = None,
        pub created: Option<f64> = Some(0.0),
        pub banned_by: Option<Value> = None,
        pub author_flair_type: Option<String> = Some("text".to_string()),
        pub likes: Option<bool> = None,
        pub banned_at_utc: Option<f64> = None,
        pub archived: Option<bool> = Some(false),
        pub no_follow: Option<bool> = Some(false),
        pub all_awardings: Option<Vec<Value>> = Some(Vec::new()),
        pub awarders: Option<Vec<Value>> = Some(Vec::new()),
        pub can_gild: Option<bool> = Some(false),
        pub locked: Option<bool> = Some(false),
        pub author_flair_text: Option<String> = Some(String::new()),
        pub treatment_tags: Option<Vec<Value>> = Some(Vec::new()),
        pub num_reports: Option<i64> = None,
        pub distinguished: Option<String> = None,
        pub subreddit_id: Option<String> = Some(String::new()),
        pub author_is_blocked: Option<bool> = Some(false),
        pub mod_reason_by: Option<String> = None,
        pub removal_reason: Option<String> = None,
        pub id: Option<String> = Some(String::new()),
        pub report_reasons: Option<Vec<Value>> = None,
        pub author: Option<String> = Some(String::new()),
        pub send_replies: Option<bool> = Some(true),
        pub author_patreon_flair: Option<bool> = Some(false),
        pub author_flair_text_color: Option<String> = Some(String::new()),
        pub permalink: Option<String> = Some(String::new()),
        pub stickied: Option<bool> = Some(false),
        pub created_utc: Option<f64> = Some(0.0),
        pub mod_reports: Option<Vec<Value>> = Some(Vec::new()),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub media_metadata: Option<Value> = None,
    }
}

schema! {
    /// A submission (`t3`): either a self-text post or a link.
    pub struct Post {
        @flatten base: PostBase,
        pub selftext: Option<String> = Some(String::new()),
        pub clicked: Option<bool> = Some(false),
        pub title: Option<String> = Some(String::new()),
        pub link_flair_richtext: Option<Vec<LinkFlairRichtext>> = Some(Vec::new()),
        pub hidden: Option<bool> = Some(false),
        pub pwls: Option<i64> = Some(6),
        pub link_flair_css_class: Option<String> = Some(String::new()),
        pub thumbnail_height: Option<u32> = None,
        pub parent_whitelist_status: Option<String> = Some("all_ads".to_string()),
        pub hide_score: Option<bool> = Some(false),
        pub quarantine: Option<bool> = Some(false),
        pub link_flair_text_color: Option<String> = Some("dark".to_string()),
        pub upvote_ratio: Option<f64> = Some(0.0),
        pub media_embed: Option<Partial> = Some(Partial::new()),
        pub thumbnail_width: Option<u32> = None,
        pub is_original_content: Option<bool> = Some(false),
        pub secure_media: Option<Value> = None,
        pub is_reddit_media_domain: Option<bool> = Some(false),
        pub is_meta: Option<bool> = Some(false),
        pub category: Option<String> = None,
        pub secure_media_embed: Option<Partial> = Some(Partial::new()),
        pub link_flair_text: Option<String> = None,
        pub is_created_from_ads_ui: Option<bool> = Some(false),
        pub thumbnail: Option<String> = Some(String::new()),
        pub post_hint: Option<String> = Some(String::new()),
        pub content_categories: Option<Vec<String>> = None,
        pub is_self: Option<bool> = Some(false),
        pub link_flair_type: Option<String> = Some("text".to_string()),
        pub wls: Option<i64> = Some(6),
        pub removed_by_category: Option<String> = None,
        pub domain: Option<String> = Some(String::new()),
        pub allow_live_comments: Option<bool> = Some(false),
        pub selftext_html: Option<String> = None,
        pub suggested_sort: Option<String> = None,
        pub view_count: Option<i64> = None,
        pub is_crosspostable: Option<bool> = Some(false),
        pub pinned: Option<bool> = Some(false),
        pub over_18: Option<bool> = Some(false),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub preview: Option<Preview> = None,
        pub media_only: Option<bool> = Some(false),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub link_flair_template_id: Option<String> = None,
        pub spoiler: Option<bool> = Some(false),
        pub visited: Option<bool> = Some(false),
        pub removed_by: Option<String> = None,
        pub link_flair_background_color: Option<String> = Some(String::new()),
        pub is_robot_indexable: Option<bool> = Some(false),
        pub num_duplicates: Option<i64> = Some(0),
        pub discussion_type: Option<String> = None,
        pub num_comments: Option<i64> = Some(0),
        pub media: Option<Value> = None,
        pub contest_mode: Option<bool> = Some(false),
        pub whitelist_status: Option<String> = Some("all_ads".to_string()),
        pub url: Option<String> = Some(String::new()),
        pub subreddit_subscribers: Option<i64> = Some(0),
        pub num_crossposts: Option<i64> = Some(0),
        pub is_video: Option<bool> = Some(false),
    }
}

/// `false` for unedited content, otherwise the edit time in epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    Flag(bool),
    At(f64),
}

impl Default for Edited {
    fn default() -> Self {
        Edited::Flag(false)
    }
}

impl Edited {
    #[must_use]
    pub fn is_edited(&self) -> bool {
        !matches!(self, Edited::Flag(false))
    }
}

/// One segment of a rich-text flair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkFlairRichtext {
    pub e: String,
    pub t: String,
}

/// Preview images attached to a link post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preview {
    pub images: Vec<PreviewImage>,
    pub enabled: bool,
}

/// One previewed image with its rendered resolutions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewImage {
    pub source: ImageSource,
    pub resolutions: Vec<ImageSource>,
    pub variants: Partial,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSource {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Schema for Post {
    const KIND: Kind = Kind::Post;
}

impl MarkdownSync for Post {
    const MARKDOWN_FIELDS: &'static [&'static str] = &["selftext"];

    fn markdown_pair_mut(&mut self, field: &str) -> Option<MarkdownPair<'_>> {
        match field {
            "selftext" => Some(MarkdownPair::new(
                &mut self.selftext,
                &mut self.selftext_html,
            )),
            _ => None,
        }
    }
}
