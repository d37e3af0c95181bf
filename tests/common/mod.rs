//! Common test utilities and helpers
//!
//! Fixtures shared by the integration tests: sample snapshots and change
//! records in the shapes the game server and the editor send.

#![allow(dead_code)]

pub mod mock_server;
#[cfg(feature = "ssr")]
pub mod server;

use serde_json::{json, Value};
use superior_editor::shared::{Rank, RankChange, Snapshot, SubmitRequest, Tag};

pub const EDITOR_ID: &str = "abc123";
pub const SERVER_UUID: &str = "uuid-999";

/// Snapshot with a single default `member` rank
pub fn member_snapshot() -> Snapshot {
    let mut member = Rank::new("member", "Member");
    member.prefix = "&7".to_string();
    member.color = "&7".to_string();
    member.default = true;

    Snapshot {
        ranks: vec![member],
        tags: vec![Tag::new("vip", "VIP")],
        last_updated: Some(json!(1_700_000_000_000i64)),
        version: Some(json!(1)),
        server_uuid: Some(SERVER_UUID.to_string()),
        ..Snapshot::default()
    }
}

/// Upload body as the game server sends it
pub fn upload_body() -> Value {
    json!({ "data": member_snapshot() })
}

/// Submit that creates a `vip` rank
pub fn create_vip() -> SubmitRequest {
    let mut vip = Rank::new("vip", "VIP");
    vip.prefix = "&a[VIP] ".to_string();
    vip.color = "&a".to_string();
    vip.weight = 10;

    SubmitRequest {
        rank_changes: vec![RankChange::create(&vip)],
        tag_changes: Vec::new(),
    }
}

/// Submit that deletes the `member` rank
pub fn delete_member() -> SubmitRequest {
    SubmitRequest {
        rank_changes: vec![RankChange::delete("member")],
        tag_changes: Vec::new(),
    }
}
