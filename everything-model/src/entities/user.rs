use super::group::Subreddit;
use crate::entity::Schema;
use crate::error::ModelResult;
use crate::merge::{Partial, merge};
use everything_types::Kind;
use serde_json::Value;
use tracing::trace;

schema! {
    /// An account (`t2`).
    pub struct User {
        pub is_employee: Option<bool> = Some(false),
        pub is_friend: Option<bool> = Some(false),
        pub subreddit: Option<Subreddit> = Some(Subreddit::default()),
        pub snoovatar_size: Option<Vec<u32>> = None,
        pub awardee_karma: Option<i64> = Some(0),
        pub id: Option<String> = Some(String::new()),
        pub verified: Option<bool> = Some(false),
        pub is_gold: Option<bool> = Some(false),
        pub is_mod: Option<bool> = Some(false),
        pub awarder_karma: Option<i64> = Some(0),
        pub has_verified_email: Option<bool> = Some(false),
        pub icon_img: Option<String> = Some(String::new()),
        pub hide_from_robots: Option<bool> = Some(false),
        pub link_karma: Option<i64> = Some(0),
        pub is_blocked: Option<bool> = Some(false),
        pub total_karma: Option<i64> = Some(0),
        pub pref_show_snoovatar: Option<bool> = Some(false),
        pub name: Option<String> = Some(String::new()),
        pub created: Option<f64> = Some(0.0),
        pub created_utc: Option<f64> = Some(0.0),
        pub snoovatar_img: Option<String> = Some(String::new()),
        pub comment_karma: Option<i64> = Some(0),
        pub accept_followers: Option<bool> = Some(false),
        pub has_subscribed: Option<bool> = Some(false),
    }
}

impl Schema for User {
    const KIND: Kind = Kind::User;

    /// The embedded profile community is an owned entity of its own: it is
    /// defaulted and merged before the user record is.
    fn normalize(partial: &mut Partial) -> ModelResult<()> {
        if let Some(slot) = partial.get_mut("subreddit") {
            if let Value::Object(raw) = slot {
                let raw = std::mem::take(raw);
                trace!("merging embedded subreddit");
                *slot = serde_json::to_value(merge(Subreddit::default(), [raw])?)?;
            }
        }
        Ok(())
    }
}
