use crate::entity::Schema;
use crate::markdown::{MarkdownPair, MarkdownSync};
use everything_types::Kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

schema! {
    /// Fields shared by a community ([`Group`]) and the profile community
    /// embedded in a [`User`](crate::User) ([`Subreddit`]).
    pub base struct GroupBase {
        pub restrict_posting: Option<bool> = Some(false),
        pub user_is_banned: Option<bool> = None,
        pub free_form_reports: Option<bool> = Some(false),
        pub user_is_muted: Option<bool> = None,
        pub display_name: Option<String> = Some(String::new()),
        pub header_img: Option<String> = Some(String::new()),
        pub title: Option<String> = Some(String::new()),
        pub icon_size: Option<Vec<u32>> = None,
        pub primary_color: Option<String> = Some(String::new()),
        pub icon_img: Option<String> = Some(String::new()),
        pub display_name_prefixed: Option<String> = Some(String::new()),
        pub subscribers: Option<i64> = Some(0),
        pub name: Option<String> = Some(String::new()),
        pub quarantine: Option<bool> = Some(false),
        pub public_description: Option<String> = Some(String::new()),
        pub community_icon: Option<String> = Some(String::new()),
        pub header_size: Option<Vec<u32>> = None,
        pub key_color: Option<String> = Some(String::new()),
        pub user_is_subscriber: Option<bool> = None,
        pub allowed_media_in_comments: Option<Vec<String>> = None,
        pub submit_text_label: Option<String> = Some(String::new()),
        pub link_flair_position: Option<String> = Some(String::new()),
        pub accept_followers: Option<bool> = Some(false),
        pub link_flair_enabled: Option<bool> = Some(false),
        pub disable_contributor_requests: Option<bool> = Some(false),
        pub subreddit_type: Option<String> = Some(String::new()),
        pub banner_img: Option<String> = Some(String::new()),
        pub show_media: Option<bool> = Some(false),
        pub user_is_moderator: Option<bool> = None,
        pub description: Option<String> = Some(String::new()),
        pub submit_link_label: Option<String> = Some(String::new()),
        pub restrict_commenting: Option<bool> = Some(false),
        pub url: Option<String> = Some(String::new()),
        pub banner_size: Option<Vec<u32>> = None,
        pub user_is_contributor: Option<bool> = None,
    }
}

schema! {
    /// A community (`t5`).
    pub struct Group {
        @flatten base: GroupBase,
        pub user_flair_background_color: Option<String> = None,
        pub submit_text_html: Option<String> = Some(String::new()),
        pub wiki_enabled: Option<bool> = Some(false),
        pub user_can_flair_in_sr: Option<bool> = None,
        pub allow_galleries: Option<bool> = Some(false),
        pub active_user_count: Option<i64> = Some(0),
        pub accounts_active: Option<i64> = Some(0),
        pub public_traffic: Option<bool> = Some(false),
        #[serde(skip_serializing_if = "Option::is_none")]
        pub user_flair_richtext: Option<Vec<Value>> = None,
        pub videostream_links_count: Option<i64> = Some(0),
        pub hide_ads: Option<bool> = Some(false),
        pub prediction_leaderboard_entry_type: Option<String> = Some(String::new()),
        pub emojis_enabled: Option<bool> = Some(false),
        pub advertiser_category: Option<String> = Some(String::new()),
        pub comment_score_hide_mins: Option<i64> = Some(0),
        pub allow_predictions: Option<bool> = Some(false),
        pub user_has_favorited: Option<bool> = None,
        pub user_flair_template_id: Option<String> = None,
        pub banner_background_image: Option<String> = Some(String::new()),
        pub original_content_tag_enabled: Option<bool> = Some(false),
        pub community_reviewed: Option<bool> = Some(false),
        pub submit_text: Option<String> = Some(String::new()),
        pub description_html: Option<String> = Some(String::new()),
        pub spoilers_enabled: Option<bool> = Some(false),
        pub comment_contribution_settings: Option<CommentContributionSettings> = Some(CommentContributionSettings::default()),
        pub allow_talks: Option<bool> = Some(false),
        pub user_flair_position: Option<String> = Some(String::new()),
        pub all_original_content: Option<bool> = Some(false),
        pub has_menu_widget: Option<bool> = Some(false),
        pub is_enrolled_in_new_modmail: Option<bool> = None,
        pub can_assign_user_flair: Option<bool> = Some(false),
        pub created: Option<f64> = Some(0.0),
        pub wls: Option<i64> = Some(6),
        pub show_media_preview: Option<bool> = Some(false),
        pub submission_type: Option<String> = Some(String::new()),
        pub allow_videogifs: Option<bool> = Some(false),
        pub should_archive_posts: Option<bool> = Some(false),
        pub user_flair_type: Option<String> = Some(String::new()),
        pub allow_polls: Option<bool> = Some(false),
        pub collapse_deleted_comments: Option<bool> = Some(false),
        pub emojis_custom_size: Option<Vec<u32>> = None,
        pub public_description_html: Option<String> = Some(String::new()),
        pub allow_videos: Option<bool> = Some(false),
        pub is_crosspostable_subreddit: Option<bool> = Some(false),
        pub notification_level: Option<String> = None,
        pub should_show_media_in_comments_setting: Option<bool> = Some(false),
        pub can_assign_link_flair: Option<bool> = Some(false),
        pub accounts_active_is_fuzzed: Option<bool> = Some(false),
        pub allow_prediction_contributors: Option<bool> = Some(false),
        pub user_sr_flair_enabled: Option<bool> = None,
        pub user_flair_enabled_in_sr: Option<bool> = Some(false),
        pub allow_chat_post_creation: Option<bool> = Some(false),
        pub allow_discovery: Option<bool> = Some(false),
        pub user_sr_theme_enabled: Option<bool> = Some(false),
        pub suggested_comment_sort: Option<String> = None,
        pub user_flair_text: Option<String> = None,
        pub banner_background_color: Option<String> = Some(String::new()),
        pub id: Option<String> = Some(String::new()),
        pub over18: Option<bool> = Some(false),
        pub header_title: Option<String> = Some(String::new()),
        pub is_chat_post_feature_enabled: Option<bool> = Some(false),
        pub user_flair_text_color: Option<String> = None,
        pub user_flair_css_class: Option<String> = None,
        pub allow_images: Option<bool> = Some(false),
        pub lang: Option<String> = Some(String::new()),
        pub whitelist_status: Option<String> = Some("all_ads".to_string()),
        pub created_utc: Option<f64> = Some(0.0),
        pub mobile_banner_image: Option<String> = Some(String::new()),
        pub allow_predictions_tournament: Option<bool> = Some(false),
    }
}

schema! {
    /// The profile community embedded in a [`User`](crate::User).
    pub struct Subreddit {
        @flatten base: GroupBase,
        pub default_set: Option<bool> = Some(false),
        pub icon_color: Option<String> = Some(String::new()),
        pub previous_names: Option<Vec<String>> = None,
        pub over_18: Option<bool> = Some(false),
        pub is_default_icon: Option<bool> = Some(false),
        pub is_default_banner: Option<bool> = Some(false),
    }
}

/// Which media types may appear in a community's comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentContributionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_media_types: Option<Vec<String>>,
}

impl Schema for Group {
    const KIND: Kind = Kind::Group;
}

impl MarkdownSync for Group {
    const MARKDOWN_FIELDS: &'static [&'static str] =
        &["submit_text", "description", "public_description"];

    fn markdown_pair_mut(&mut self, field: &str) -> Option<MarkdownPair<'_>> {
        match field {
            "submit_text" => Some(MarkdownPair::new(
                &mut self.submit_text,
                &mut self.submit_text_html,
            )),
            "description" => Some(MarkdownPair::new(
                &mut self.base.description,
                &mut self.description_html,
            )),
            "public_description" => Some(MarkdownPair::new(
                &mut self.base.public_description,
                &mut self.public_description_html,
            )),
            _ => None,
        }
    }
}

// Subreddit is never wrapped on its own; it declares no markdown fields.
impl MarkdownSync for Subreddit {
    const MARKDOWN_FIELDS: &'static [&'static str] = &[];

    fn markdown_pair_mut(&mut self, _field: &str) -> Option<MarkdownPair<'_>> {
        None
    }
}
