use super::*;
use crate::db::MemoryStore;
use crate::index::DEFAULT_FOLDER_ID;

fn admin_session() -> Session<MemoryStore> {
    let mut session = Session::open(MemoryStore::new());
    session.set_admin(true);
    session
}

fn add(session: &mut Session<MemoryStore>, name: &str, category: &str) -> String {
    session
        .create_item(
            ItemDraft::named(name)
                .category(category)
                .angle("정면", format!("https://img/{name}.png")),
        )
        .unwrap()
}

fn visible_names(session: &Session<MemoryStore>) -> Vec<String> {
    session.visible_items().iter().map(|i| i.name.clone()).collect()
}

#[test]
fn test_open_empty_store() {
    let session = Session::open(MemoryStore::new());
    assert!(session.visible_items().is_empty());
    assert_eq!(session.categories().len(), 3);
    assert_eq!(session.folders()[0].id, DEFAULT_FOLDER_ID);
    assert!(!session.is_admin());
}

#[test]
fn test_mutations_require_admin() {
    let mut session = Session::open(MemoryStore::new());
    assert_eq!(
        session.create_item(ItemDraft::named("Rei").angle("정면", "")),
        Err(CatalogError::AdminRequired)
    );
    assert_eq!(session.create_category("메카"), Err(CatalogError::AdminRequired));
    assert_eq!(
        session.delete_category("퍼리", &AlwaysConfirm),
        Err(CatalogError::AdminRequired)
    );
    assert!(session.catalog().is_empty());
}

#[test]
fn test_create_item_persists() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");

    let stored = session.store().get(StoreKey::Items).unwrap().unwrap();
    assert!(stored.contains(&id));
    assert!(stored.contains("\"isUserAdded\":true"));
}

#[test]
fn test_newest_item_first() {
    let mut session = admin_session();
    add(&mut session, "Rei", "여성 캐릭터");
    add(&mut session, "Asuka", "여성 캐릭터");
    assert_eq!(visible_names(&session), vec!["Asuka", "Rei"]);
}

#[test]
fn test_locked_item_cannot_be_edited() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.set_locked(&id, true).unwrap();

    assert_eq!(
        session.update_item(&id, ItemDraft::named("Rei 2")),
        Err(CatalogError::Locked(id.clone()))
    );

    session.set_locked(&id, false).unwrap();
    session.update_item(&id, ItemDraft::named("Rei 2")).unwrap();
    assert_eq!(session.item(&id).unwrap().name, "Rei 2");
}

#[test]
fn test_update_unknown_item() {
    let mut session = admin_session();
    assert_eq!(
        session.update_item("nope", ItemDraft::named("X")),
        Err(CatalogError::NotFound("nope".to_string()))
    );
}

#[test]
fn test_delete_item_declined() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");

    assert_eq!(session.delete_item(&id, &NeverConfirm), Ok(false));
    assert!(session.item(&id).is_some());
}

#[test]
fn test_delete_locked_item_closes_detail() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.set_locked(&id, true).unwrap();
    session.open_item(id.clone());
    assert!(session.current_item().is_some());

    let asked = std::cell::Cell::new(0);
    let gate = |prompt: &str| {
        asked.set(asked.get() + 1);
        prompt.contains("Rei")
    };
    assert_eq!(session.delete_item(&id, &gate), Ok(true));
    assert_eq!(asked.get(), 1);
    assert!(session.item(&id).is_none());
    assert!(session.cursor().open_id().is_none());
}

#[test]
fn test_delete_item_keeps_references() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.toggle_favorite(&id);
    session.add_to_folder(&id, DEFAULT_FOLDER_ID);

    session.delete_item(&id, &AlwaysConfirm).unwrap();
    assert!(session.is_favorite(&id));
    assert!(session.folder(DEFAULT_FOLDER_ID).unwrap().contains(&id));

    session.show_bookmarks();
    assert!(session.visible_items().is_empty());
}

#[test]
fn test_bookmark_view() {
    let mut session = admin_session();
    let rei = add(&mut session, "Rei", "여성 캐릭터");
    add(&mut session, "Shinji", "남성 캐릭터");

    assert!(session.toggle_favorite(&rei));
    session.show_bookmarks();
    assert_eq!(visible_names(&session), vec!["Rei"]);

    assert!(!session.toggle_favorite(&rei));
    assert!(session.visible_items().is_empty());
}

#[test]
fn test_folder_view_and_delete_resets() {
    let mut session = admin_session();
    let rei = add(&mut session, "Rei", "여성 캐릭터");
    add(&mut session, "Shinji", "남성 캐릭터");

    let folder = session.create_folder("EVA").unwrap();
    assert!(session.add_to_folder(&rei, &folder));
    assert!(!session.add_to_folder(&rei, &folder));
    session.select_folder(folder.clone());
    assert_eq!(visible_names(&session), vec!["Rei"]);

    assert!(!session.delete_folder(&folder, &NeverConfirm));
    assert!(session.delete_folder(&folder, &AlwaysConfirm));
    assert_eq!(session.view().mode, ViewMode::All);
    assert_eq!(session.visible_items().len(), 2);
}

#[test]
fn test_delete_unknown_folder_never_prompts() {
    let mut session = Session::open(MemoryStore::new());
    let gate = |_: &str| -> bool { panic!("should not prompt") };
    assert!(!session.delete_folder("missing", &gate));
}

#[test]
fn test_folders_open_to_everyone() {
    let mut session = Session::open(MemoryStore::new());
    let id = session.create_folder("Mine").unwrap();
    assert!(session.rename_folder(&id, "Ours"));
    assert!(session.add_to_folder("1", &id));
    assert!(session.remove_from_folder("1", &id));
    assert_eq!(session.folder(&id).unwrap().name, "Ours");
}

#[test]
fn test_rename_category_moves_filter() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.set_category(CategoryFilter::named("여성 캐릭터"));

    assert_eq!(session.rename_category("여성 캐릭터", "여캐"), Ok(true));
    assert_eq!(session.view().category, CategoryFilter::named("여캐"));
    assert_eq!(session.item(&id).unwrap().category, "여캐");
    assert_eq!(visible_names(&session), vec!["Rei"]);
}

#[test]
fn test_rename_category_to_existing_is_noop() {
    let mut session = admin_session();
    assert_eq!(session.rename_category("여성 캐릭터", "퍼리"), Ok(false));
    assert_eq!(session.categories().len(), 3);
}

#[test]
fn test_delete_category_resets_filter() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "퍼리");
    session.set_category(CategoryFilter::named("퍼리"));

    assert_eq!(session.delete_category("퍼리", &NeverConfirm), Ok(false));
    assert_eq!(session.delete_category("퍼리", &AlwaysConfirm), Ok(true));
    assert_eq!(session.view().category, CategoryFilter::All);
    assert!(!session.categories().contains(&"퍼리".to_string()));
    assert_eq!(session.item(&id).unwrap().category, "퍼리");
}

#[test]
fn test_search_character_resets_view() {
    let mut session = admin_session();
    let rei = session
        .create_item(
            ItemDraft::named("Plugsuit")
                .character("Ayanami Rei")
                .category("여성 캐릭터")
                .angle("정면", "https://img/plugsuit.png"),
        )
        .unwrap();
    add(&mut session, "Shinji", "남성 캐릭터");

    session.show_bookmarks();
    session.set_category(CategoryFilter::named("남성 캐릭터"));
    session.open_item(rei.clone());

    session.search_character("Ayanami Rei");
    assert_eq!(session.view().mode, ViewMode::All);
    assert_eq!(session.view().category, CategoryFilter::All);
    assert_eq!(session.view().search, "Ayanami Rei");
    assert!(session.current_item().is_none());
    assert_eq!(visible_names(&session), vec!["Plugsuit"]);
}

#[test]
fn test_navigate_wraps() {
    let mut session = admin_session();
    add(&mut session, "A", "퍼리");
    add(&mut session, "B", "퍼리");
    let c = add(&mut session, "C", "퍼리");

    session.open_item(c);
    assert!(session.navigate(Direction::Prev));
    assert_eq!(session.current_item().unwrap().name, "A");
    assert!(session.navigate(Direction::Next));
    assert_eq!(session.current_item().unwrap().name, "C");
}

#[test]
fn test_current_item_hidden_by_filter() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.open_item(id);
    session.set_search("zzz");
    assert!(session.current_item().is_none());
    assert!(!session.navigate(Direction::Next));
    session.set_search("");
    assert!(session.current_item().is_some());
}

#[test]
fn test_state_survives_reopen() {
    let mut session = admin_session();
    let id = add(&mut session, "Rei", "여성 캐릭터");
    session.toggle_favorite(&id);
    session.create_category("메카").unwrap();
    let folder = session.create_folder("EVA").unwrap();
    session.add_to_folder(&id, &folder);

    let store = MemoryStore::new();
    session.snapshot().save(&store).unwrap();
    let reopened = Session::open(store);

    assert!(reopened.is_admin());
    assert!(reopened.is_favorite(&id));
    assert!(reopened.categories().contains(&"메카".to_string()));
    assert!(reopened.folder(&folder).unwrap().contains(&id));
    assert_eq!(reopened.snapshot(), session.snapshot());
}

#[test]
fn test_placeholder_option() {
    let options = SessionOptions {
        placeholder_thumbnail: Some("https://img/none.png".to_string()),
    };
    let mut session = Session::with_options(MemoryStore::new(), &options);
    session.set_admin(true);
    let id = session
        .create_item(
            ItemDraft::named("Rei")
                .angle("정면", "")
                .angle("뒷면", "https://img/back.png"),
        )
        .unwrap();
    assert_eq!(session.item(&id).unwrap().thumbnail, "https://img/none.png");
}

#[test]
fn test_fresh_ids_never_collide_with_loaded() {
    let future = "99999999999999";
    let snapshot = Snapshot {
        items: vec![crate::testing::stored_item(future, "Rei", "여성 캐릭터")],
        admin_mode: true,
        ..Snapshot::default()
    };
    let mut session = Session::from_snapshot(MemoryStore::new(), snapshot, &SessionOptions::default());

    let id = add(&mut session, "Asuka", "여성 캐릭터");
    assert!(id.parse::<i64>().unwrap() > future.parse::<i64>().unwrap());
}

#[test]
fn test_fresh_ids_skip_stale_bookmarks_and_folder_entries() {
    let bookmarked = "99999999999999";
    let filed = "199999999999999";
    let mut favorites = FavoriteSet::new();
    favorites.toggle(bookmarked);
    let mut folder = Folder::new("f", "EVA");
    folder.item_ids = vec![filed.to_string()];
    let snapshot = Snapshot {
        favorites,
        folders: vec![folder],
        admin_mode: true,
        ..Snapshot::default()
    };
    let mut session = Session::from_snapshot(MemoryStore::new(), snapshot, &SessionOptions::default());

    let id = add(&mut session, "Asuka", "여성 캐릭터");
    assert!(id.parse::<i64>().unwrap() > filed.parse::<i64>().unwrap());
    assert!(!session.is_favorite(&id));
    assert!(!session.folder("f").unwrap().contains(&id));
}

#[test]
fn test_create_after_loading_max_id() {
    let loaded = format!(
        r#"[{{"id":"{}","name":"Rei","category":"퍼리","angles":[{{"label":"정면","url":"https://img/rei.png"}}]}}]"#,
        i64::MAX
    );
    let store = MemoryStore::new()
        .with_value(StoreKey::Items, loaded)
        .with_value(StoreKey::AdminMode, "true");
    let mut session = Session::open(store);
    assert_eq!(session.catalog().len(), 1);

    let id = add(&mut session, "Asuka", "퍼리");
    assert_ne!(id, i64::MAX.to_string());
    assert_eq!(session.catalog().len(), 2);
}

#[test]
fn test_unknown_category_rejected() {
    let mut session = admin_session();
    let result = session.create_item(
        ItemDraft::named("X")
            .category("NoSuchCategory")
            .angle("정면", "https://img/x.png"),
    );
    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(session.store().get(StoreKey::Items).unwrap(), None);

    let id = add(&mut session, "Rei", "여성 캐릭터");
    let result = session.update_item(&id, ItemDraft::default().category(""));
    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(session.item(&id).unwrap().category, "여성 캐릭터");
}

#[test]
fn test_create_without_categories_persists_seeded_one() {
    let store = MemoryStore::new()
        .with_value(StoreKey::Categories, "[]")
        .with_value(StoreKey::AdminMode, "true");
    let mut session = Session::open(store);
    assert!(session.categories().is_empty());

    let id = session
        .create_item(ItemDraft::named("Rei").angle("정면", "https://img/rei.png"))
        .unwrap();
    assert_eq!(session.item(&id).unwrap().category, crate::catalog::UNCATEGORIZED);
    assert_eq!(
        session.store().get(StoreKey::Categories).unwrap().as_deref(),
        Some(r#"["미분류"]"#)
    );
}

#[test]
fn test_folder_view_skips_deleted_items() {
    let mut folder = crate::index::Folder::new("f", "EVA");
    folder.item_ids = vec!["1".into(), "2".into()];
    let snapshot = Snapshot {
        items: vec![
            crate::testing::stored_item("2", "Asuka", "여성 캐릭터"),
            crate::testing::stored_item("1", "Rei", "여성 캐릭터"),
        ],
        folders: vec![folder],
        admin_mode: true,
        ..Snapshot::default()
    };
    let mut session = Session::from_snapshot(MemoryStore::new(), snapshot, &SessionOptions::default());

    session.delete_item("2", &AlwaysConfirm).unwrap();
    session.select_folder("f");
    assert_eq!(visible_names(&session), vec!["Rei"]);
    assert_eq!(session.folder("f").unwrap().item_ids.len(), 2);
}

#[test]
fn test_malformed_store_opens_with_defaults() {
    let store = MemoryStore::new()
        .with_value(StoreKey::Items, "{")
        .with_value(StoreKey::Folders, "[1,2]")
        .with_value(StoreKey::AdminMode, "\"yes\"");
    let session = Session::open(store);
    assert!(session.catalog().is_empty());
    assert_eq!(session.folders()[0].id, DEFAULT_FOLDER_ID);
    assert!(!session.is_admin());
}
