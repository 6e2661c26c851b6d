use crate::entity::Schema;
use everything_types::Kind;

schema! {
    /// Placeholder (`more`) for comments that exist but were not loaded.
    ///
    /// `children` holds the bare ids to request next.
    pub struct MoreComments {
        pub count: Option<i64> = Some(0),
        pub name: Option<String> = Some(String::new()),
        pub id: Option<String> = Some(String::new()),
        pub parent_id: Option<String> = Some(String::new()),
        pub depth: Option<i64> = Some(0),
        pub children: Option<Vec<String>> = Some(Vec::new()),
    }
}

impl Schema for MoreComments {
    const KIND: Kind = Kind::MoreComments;
}
