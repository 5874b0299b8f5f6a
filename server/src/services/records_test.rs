use super::*;

// =============================================================================
// Counter name gate
// =============================================================================

#[test]
fn counter_names_are_a_closed_set() {
    assert!(valid_counter_name("views"));
    assert!(valid_counter_name("likes"));
    assert!(valid_counter_name("clicks"));
    assert!(!valid_counter_name("views; DROP TABLE counters"));
    assert!(!valid_counter_name(""));
}

// =============================================================================
// Validation happens at the store boundary
// =============================================================================

#[tokio::test]
async fn create_comment_rejects_invalid_input_before_touching_the_db() {
    // connect_lazy pool: a query would fail, so an Invalid error proves the
    // input was rejected before any DB round trip.
    let state = crate::state::test_helpers::test_app_state();
    let input = NewComment { author: String::new(), body: "hi".into() };
    let err = create_comment(&state.pool, &input).await.unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
}

#[tokio::test]
async fn get_counter_rejects_unknown_names_before_touching_the_db() {
    let state = crate::state::test_helpers::test_app_state();
    let err = get_counter(&state.pool, "anything").await.unwrap_err();
    assert!(matches!(err, StoreError::Invalid(_)));
}

// =============================================================================
// Live database round trips (require DATABASE_URL)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn live_pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        crate::db::init_pool(&url).await.expect("live db init")
    }

    #[tokio::test]
    async fn comment_round_trip_starts_with_zero_likes() {
        let pool = live_pool().await;
        let input = NewComment { author: "Live Test".into(), body: "round trip".into() };
        let created = create_comment(&pool, &input).await.unwrap();
        assert_eq!(created.likes, 0);

        let listed = list_comments(&pool).await.unwrap();
        assert_eq!(listed.iter().filter(|c| c.id == created.id).count(), 1);
    }

    #[tokio::test]
    async fn like_comment_increments_atomically() {
        let pool = live_pool().await;
        let created = create_comment(&pool, &NewComment { author: "Liker".into(), body: "likes".into() })
            .await
            .unwrap();

        let first = like_comment(&pool, created.id).await.unwrap();
        let second = like_comment(&pool, created.id).await.unwrap();
        assert_eq!(second, first + 1);
    }

    #[tokio::test]
    async fn counter_upsert_counts_from_one() {
        let pool = live_pool().await;
        let before = get_counter(&pool, "clicks").await.unwrap();
        let after = increment_counter(&pool, "clicks").await.unwrap();
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn leaderboard_is_descending() {
        let pool = live_pool().await;
        for (player, score) in [("a", 3), ("b", 9), ("c", 6)] {
            create_score(&pool, &NewScore { player: player.into(), score }).await.unwrap();
        }
        let scores = top_scores(&pool).await.unwrap();
        assert!(scores.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
}
