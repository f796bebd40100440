use serde_json::json;
use testbed_core::form::{Field, RegistrationForm};
use testbed_core::todo::{Counts, Filter, TodoError, TodoList};
use testbed_core::upload::{UploadError, UploadQueue, format_file_size};

/// The todo page: add a few items, work through them, then tidy up.
#[test]
fn todo_page_session() {
    let mut list = TodoList::new();
    let groceries = list.add("  buy groceries ").unwrap().id.clone();
    let report = list.add("write report").unwrap().id.clone();
    list.add("call mom").unwrap();
    assert_eq!(list.add("   "), Err(TodoError::EmptyText));

    assert_eq!(list.get(&groceries).unwrap().text, "buy groceries");
    assert!(list.toggle(&groceries).unwrap());
    list.update(&report, "write quarterly report").unwrap();

    let filter: Filter = "active".parse().unwrap();
    let active: Vec<&str> = list.filtered(filter).map(|t| t.text.as_str()).collect();
    assert_eq!(active, vec!["write quarterly report", "call mom"]);
    assert_eq!(list.counts(), Counts { total: 3, active: 2, completed: 1 });

    assert_eq!(list.clear_completed(), 1);
    assert!(list.get(&groceries).is_none());
    assert_eq!(list.toggle(&groceries), Err(TodoError::NotFound(groceries.clone())));

    list.remove(&report).unwrap();
    assert_eq!(list.counts().total, 1);
}

/// The registration page: a payload as the browser posts it, fixed field by
/// field until it validates.
#[test]
fn registration_page_session() {
    let payload = json!({
        "firstName": "Ada",
        "email": "ada@example",
        "password": "short",
        "confirmPassword": "shorter",
        "age": 130,
        "interests": ["coding"]
    });
    let mut form: RegistrationForm = serde_json::from_value(payload).unwrap();

    let failing: Vec<Field> = form.validate().iter().map(|e| e.field).collect();
    assert_eq!(
        failing,
        vec![Field::LastName, Field::Email, Field::Password, Field::ConfirmPassword, Field::Age, Field::Terms]
    );

    form.last_name = "Lovelace".into();
    form.email = "ada@example.com".into();
    form.password = "analytical".into();
    form.confirm_password = "analytical".into();
    form.age = Some(36);
    form.terms = true;
    form.toggle_interest("coding");
    form.toggle_interest("math");

    assert!(form.is_valid(), "{:?}", form.validate());
    assert_eq!(form.interests, vec!["math"]);
}

/// The upload page: queue files, show their sizes, drop one, then clear.
#[test]
fn upload_page_session() {
    let mut queue = UploadQueue::new();
    let photo = queue.add("photo.jpg", 1536, "image/jpeg").id;
    queue.add("notes.txt", 512, "");
    queue.add("video.mp4", 5 * 1024 * 1024, "video/mp4");

    let sizes: Vec<String> = queue.iter().map(|f| format_file_size(f.size)).collect();
    assert_eq!(sizes, vec!["1.5 KB", "512 Bytes", "5 MB"]);
    assert_eq!(format_file_size(queue.total_size()), "5 MB");

    let removed = queue.remove(photo).unwrap();
    assert_eq!(removed.name, "photo.jpg");
    assert_eq!(queue.remove(photo), Err(UploadError::NotFound(photo)));
    assert_eq!(queue.total_size(), 512 + 5 * 1024 * 1024);

    queue.clear();
    assert_eq!(queue.iter().count(), 0);
}
