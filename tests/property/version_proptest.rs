//! Property-based tests for change-set versioning

use std::sync::Arc;

use proptest::prelude::*;
use superior_editor::backend::{EditorService, MemorySessionStore};
use superior_editor::shared::{RankChange, SubmitRequest};

use crate::common;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_versions_count_up_from_one(submits in 1usize..20) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let service = EditorService::new(Arc::new(MemorySessionStore::new()));
            service.upload(common::EDITOR_ID, common::member_snapshot()).unwrap();

            for expected in 1..=submits as u64 {
                let request = SubmitRequest {
                    rank_changes: vec![RankChange::delete(format!("rank{}", expected))],
                    tag_changes: Vec::new(),
                };
                let response = service.submit(common::EDITOR_ID, request).await.unwrap();
                assert_eq!(response.version, expected);
            }

            let changes = service.retrieve(common::EDITOR_ID).unwrap();
            assert_eq!(changes.version, submits as u64);
            assert_eq!(changes.rank_changes[0].rank_id, format!("rank{}", submits));
        });
    }
}
