use everything_model::{
    Comment, Edited, Entity, Envelope, Group, Kind, MoreComments, Post, Replies, Subreddit, User,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// ── Defaults ────────────────────────────────────────────────────

#[test]
fn group_defaults() {
    let group = Group::default();
    assert_eq!(group.whitelist_status.as_deref(), Some("all_ads"));
    assert_eq!(group.wls, Some(6));
    assert_eq!(group.base.description.as_deref(), Some(""));
    assert_eq!(group.submit_text_html.as_deref(), Some(""));
    assert!(group.extra.is_empty());
}

#[test]
fn post_defaults() {
    let post = Post::default();
    assert_eq!(post.base.subreddit_type.as_deref(), Some("public"));
    assert_eq!(post.base.author_flair_type.as_deref(), Some("text"));
    assert_eq!(post.base.send_replies, Some(true));
    assert_eq!(post.link_flair_text_color.as_deref(), Some("dark"));
    assert_eq!(post.selftext.as_deref(), Some(""));
    assert_eq!(post.selftext_html, None);
    assert_eq!(post.preview, None);
    assert_eq!(post.base.edited, Some(Edited::Flag(false)));
}

#[test]
fn user_embeds_default_profile_community() {
    let user = User::default();
    assert_eq!(user.subreddit, Some(Subreddit::default()));
}

#[test]
fn more_comments_defaults() {
    let more = MoreComments::default();
    assert_eq!(more.count, Some(0));
    assert_eq!(more.children, Some(Vec::new()));
}

#[test]
fn kinds_are_constant_per_schema() {
    assert_eq!(User::default().kind(), Kind::User);
    assert_eq!(Group::default().kind(), Kind::Group);
    assert_eq!(Post::default().kind(), Kind::Post);
    assert_eq!(Comment::default().kind(), Kind::Comment);
    assert_eq!(MoreComments::default().kind(), Kind::MoreComments);
}

// ── Wire shape ──────────────────────────────────────────────────

#[test]
fn base_fields_serialize_flat() {
    let value = serde_json::to_value(Group::default()).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("display_name"));
    assert!(object.contains_key("submit_text"));
    assert!(!object.contains_key("base"));
    assert!(!object.contains_key("extra"));
}

#[test]
fn no_entity_declares_kind_or_data() {
    let shapes = [
        serde_json::to_value(User::default()).unwrap(),
        serde_json::to_value(Group::default()).unwrap(),
        serde_json::to_value(Post::default()).unwrap(),
        serde_json::to_value(Comment::default()).unwrap(),
        serde_json::to_value(MoreComments::default()).unwrap(),
    ];
    for shape in shapes {
        let object = shape.as_object().unwrap();
        assert!(!object.contains_key("kind"));
        assert!(!object.contains_key("data"));
    }
}

#[test]
fn unknown_fields_round_trip() {
    let envelope = Envelope::post(json!({
        "title": "hello",
        "brand_new_field": {"nested": [1, 2]},
    }))
    .unwrap();

    assert_eq!(
        envelope.extra.get("brand_new_field"),
        Some(&json!({"nested": [1, 2]}))
    );
    let wire = serde_json::to_value(&envelope).unwrap();
    assert_eq!(wire["data"]["brand_new_field"], json!({"nested": [1, 2]}));
    assert_eq!(wire["data"]["title"], "hello");
}

#[test]
fn known_base_fields_are_not_duplicated_into_extra() {
    let envelope = Envelope::comment(json!({"author": "ferris", "body": "hi"})).unwrap();
    assert_eq!(envelope.base.author.as_deref(), Some("ferris"));
    assert!(envelope.extra.is_empty());
}

#[test]
fn edited_accepts_flag_or_timestamp() {
    let plain = Envelope::post(json!({"edited": false})).unwrap();
    assert_eq!(plain.base.edited, Some(Edited::Flag(false)));

    let edited = Envelope::post(json!({"edited": 1_690_000_000.0})).unwrap();
    let at = edited.base.edited.as_ref().unwrap();
    assert_eq!(at, &Edited::At(1_690_000_000.0));
    assert!(at.is_edited());
}

#[test]
fn null_replies_stay_null() {
    let comment = Envelope::comment(json!({"replies": null})).unwrap();
    assert_eq!(comment.replies, None);
    let wire = serde_json::to_value(&comment).unwrap();
    assert!(wire["data"]["replies"].is_null());
}

// ── User ────────────────────────────────────────────────────────

#[test]
fn user_subreddit_is_merged_over_defaults() {
    let user = Envelope::user(json!({
        "name": "ferris",
        "subreddit": {"display_name": "u_ferris", "over_18": true},
    }))
    .unwrap();

    let subreddit = user.subreddit.as_ref().unwrap();
    assert_eq!(subreddit.base.display_name.as_deref(), Some("u_ferris"));
    assert_eq!(subreddit.over_18, Some(true));
    assert_eq!(subreddit.base.description.as_deref(), Some(""));
    assert_eq!(subreddit.icon_color.as_deref(), Some(""));
}

#[test]
fn user_subreddit_null_stays_null() {
    let user = Envelope::user(json!({"subreddit": null})).unwrap();
    assert_eq!(user.subreddit, None);
}

#[test]
fn user_without_subreddit_keeps_default() {
    let user = Envelope::user(json!({"name": "ferris"})).unwrap();
    assert_eq!(user.subreddit, Some(Subreddit::default()));
}

// ── Comment replies ─────────────────────────────────────────────

#[test]
fn empty_string_replies() {
    let comment = Envelope::comment(json!({"replies": ""})).unwrap();
    let replies = comment.replies.as_ref().unwrap();
    assert_eq!(replies, &Replies::Text(String::new()));
    assert!(replies.is_empty());
    assert!(replies.listing().is_none());
}

#[test]
fn nested_listing_replies() {
    let comment = Envelope::comment(json!({
        "id": "c1",
        "replies": {
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t1", "data": {"id": "c2", "body": "child"}},
                    {"kind": "more", "data": {"count": 3, "children": ["c3", "c4"]}},
                ],
            },
        },
    }))
    .unwrap();

    let replies = comment.replies.as_ref().unwrap();
    assert!(!replies.is_empty());
    let replies = replies.listing().unwrap();
    assert_eq!(replies.len(), 2);

    let first = &replies.children[0];
    assert_eq!(first.kind(), Kind::Comment);
    assert_eq!(first.as_comment().unwrap().body.as_deref(), Some("child"));
    assert_eq!(replies.children[1].kind(), Kind::MoreComments);
}

#[test]
fn replies_serialize_back_to_wire_shape() {
    let raw = json!({
        "kind": "Listing",
        "data": {"children": [{"kind": "t1", "data": {"id": "c2"}}]},
    });
    let comment = Envelope::comment(json!({"replies": raw})).unwrap();
    let wire = serde_json::to_value(&comment).unwrap();
    assert_eq!(wire["data"]["replies"]["kind"], "Listing");
    assert_eq!(wire["data"]["replies"]["data"]["children"][0]["kind"], "t1");
    assert_eq!(
        wire["data"]["replies"]["data"]["children"][0]["data"]["id"],
        Value::from("c2")
    );
}
