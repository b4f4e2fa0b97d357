//! Integration tests for the `note` repository against a real MySQL database.

use sqlx::MySqlPool;
use sticky_db::models::note::CreateNote;
use sticky_db::repositories::NoteRepo;

fn new_note(user_id: u64, title: &str) -> CreateNote {
    CreateNote {
        user_id,
        title: title.to_string(),
        text: format!("body of {title}"),
        color: "ff00aa".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find(pool: MySqlPool) {
    let id = NoteRepo::create(&pool, &new_note(7, "groceries"))
        .await
        .unwrap();

    let note = NoteRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(note.note_id, id);
    assert_eq!(note.user_id, 7);
    assert_eq!(note.title, "groceries");
    assert_eq!(note.text, "body of groceries");
    assert_eq!(note.color, "ff00aa");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_returns_none(pool: MySqlPool) {
    assert!(NoteRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_returns_all_in_insertion_order(pool: MySqlPool) {
    let a = NoteRepo::create(&pool, &new_note(1, "a")).await.unwrap();
    let b = NoteRepo::create(&pool, &new_note(0, "b")).await.unwrap();
    let c = NoteRepo::create(&pool, &new_note(2, "c")).await.unwrap();

    let ids: Vec<u64> = NoteRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.note_id)
        .collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_author_filters_on_owner(pool: MySqlPool) {
    NoteRepo::create(&pool, &new_note(1, "mine-1")).await.unwrap();
    NoteRepo::create(&pool, &new_note(2, "theirs")).await.unwrap();
    NoteRepo::create(&pool, &new_note(1, "mine-2")).await.unwrap();
    NoteRepo::create(&pool, &new_note(0, "anonymous")).await.unwrap();

    for (owner, expected) in [(1, 2), (2, 1), (0, 1), (42, 0)] {
        let notes = NoteRepo::list_by_author(&pool, owner).await.unwrap();
        assert_eq!(notes.len(), expected, "owner {owner}");
        assert!(notes.iter().all(|n| n.user_id == owner));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_at_assigned_by_store(pool: MySqlPool) {
    let before = chrono::Utc::now() - chrono::Duration::minutes(1);
    let id = NoteRepo::create(&pool, &new_note(1, "ts")).await.unwrap();

    let note = NoteRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(note.created_at >= before);
}
