//! Repository Integration Tests
//!
//! Tests for the collection repositories over an in-memory store.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{
        Author, Category, ComplaintDraft, Feedback, FeedbackDraft, Priority, Profile, Role, Session,
        Status, User,
    };
    use crate::storage::{keys, JsonStore, KeyValueStore, MemoryStore};

    fn setup_test_store() -> JsonStore<MemoryStore> {
        JsonStore::new(MemoryStore::new())
    }

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn author() -> Author {
        Author::new(Some("u1".to_string()), "Asha")
    }

    fn feedback_draft(title: &str) -> FeedbackDraft {
        FeedbackDraft {
            title: title.to_string(),
            message: format!("{title} details"),
            category: "Bug".to_string(),
            rating: Some(4),
        }
    }

    #[test]
    fn test_submit_feedback_adds_one_pending_entry() {
        let store = setup_test_store();
        let repo = store.feedback();
        repo.submit(&author(), &feedback_draft("First"), at(1)).unwrap();

        let created = repo.submit(&author(), &feedback_draft("Second"), at(2)).unwrap();

        let all = repo.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], created);
        assert_eq!(created.status, Status::Pending);
        assert_eq!(created.id, "fb2");
    }

    #[test]
    fn test_submit_feedback_rejects_missing_title() {
        let store = setup_test_store();
        let err = store
            .feedback()
            .submit(&author(), &feedback_draft(""), at(1))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.feedback().list().is_empty());
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let store = setup_test_store();
        let a = store.feedback().submit(&author(), &feedback_draft("A"), at(5)).unwrap();
        let b = store.feedback().submit(&author(), &feedback_draft("B"), at(5)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_set_status_replaces_only_that_entry() {
        let store = setup_test_store();
        let repo = store.feedback();
        let first = repo.submit(&author(), &feedback_draft("First"), at(1)).unwrap();
        let second = repo.submit(&author(), &feedback_draft("Second"), at(2)).unwrap();

        let updated = repo.set_status(&first.id, Status::Resolved, "  fixed in 2.1 ").unwrap();
        assert_eq!(updated.admin_remark.as_deref(), Some("fixed in 2.1"));

        let all = repo.list();
        assert_eq!(all[1].status, Status::Resolved);
        assert_eq!(all[0], second);

        let cleared = repo.set_status(&first.id, Status::Resolved, "").unwrap();
        assert_eq!(cleared.admin_remark, None);
    }

    #[test]
    fn test_set_status_unknown_id() {
        let store = setup_test_store();
        let err = store.feedback().set_status("missing", Status::Resolved, "").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_complaint_assign_moves_to_in_process() {
        let store = setup_test_store();
        let repo = store.complaints();
        let draft = ComplaintDraft {
            subject: "Refund".to_string(),
            message: "Charged twice".to_string(),
            category: "Service".to_string(),
            priority: Priority::High,
        };
        let complaint = repo.submit(&author(), &draft, at(10)).unwrap();
        assert_eq!(complaint.id, "cmp10");

        let assigned = repo.assign(&complaint.id, "Meera").unwrap();
        assert_eq!(assigned.assigned_to.as_deref(), Some("Meera"));
        assert_eq!(assigned.status, Status::InProcess);

        assert!(repo.assign(&complaint.id, "  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_toggle_blocked_twice_restores() {
        let store = setup_test_store();
        store.set(keys::USERS, &vec![User::new("u1", "Asha", "asha@mail.com")]).unwrap();
        let users = store.users();

        assert!(users.toggle_blocked("u1").unwrap().blocked);
        assert!(!users.toggle_blocked("u1").unwrap().blocked);
        assert!(!users.find("u1").unwrap().blocked);
    }

    #[test]
    fn test_delete_user_prunes_their_submissions() {
        let store = setup_test_store();
        store
            .set(
                keys::USERS,
                &vec![User::new("u1", "Asha", "a@mail.com"), User::new("u2", "Ravi", "r@mail.com")],
            )
            .unwrap();
        let ravi = Author::new(Some("u2".to_string()), "Ravi");
        store.feedback().submit(&author(), &feedback_draft("Mine"), at(1)).unwrap();
        store.feedback().submit(&ravi, &feedback_draft("Theirs"), at(2)).unwrap();

        store.users().delete("u1").unwrap();

        let remaining: Vec<String> = store.users().list().into_iter().map(|u| u.id).collect();
        assert_eq!(remaining, vec!["u2".to_string()]);
        let feedback = store.feedback().list();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].user.as_deref(), Some("Ravi"));
    }

    #[test]
    fn test_sign_in_registers_once() {
        let store = setup_test_store();
        let first = store.users().sign_in_as("Asha", Role::User, at(1)).unwrap();
        let again = store.users().sign_in_as(" Asha ", Role::User, at(2)).unwrap();
        assert_eq!(first, again);
        assert_eq!(store.users().list().len(), 1);

        store.session().sign_in(&first).unwrap();
        assert_eq!(store.session().current(), Some(first));
        store.session().sign_out().unwrap();
        assert_eq!(store.session().current(), None::<Session>);
    }

    #[test]
    fn test_sign_in_keeps_chosen_role_for_known_name() {
        let store = setup_test_store();
        let as_user = store.users().sign_in_as("Asha", Role::User, at(1)).unwrap();
        let as_admin = store.users().sign_in_as("Asha", Role::Admin, at(2)).unwrap();

        assert!(as_admin.is_admin());
        assert_eq!(as_admin.user_id, as_user.user_id);
        assert_eq!(store.users().list().len(), 1);

        let back_to_user = store.users().sign_in_as("Asha", Role::User, at(3)).unwrap();
        assert_eq!(back_to_user, as_user);
    }

    #[test]
    fn test_legacy_plain_name_session() {
        let store = setup_test_store();
        store.backend().set_raw(keys::CURRENT_USER, "Asha").unwrap();

        let session = store.session().current().unwrap();
        assert_eq!(session.name, "Asha");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user_id, None);
    }

    #[test]
    fn test_seed_categories_on_empty_collection() {
        let store = setup_test_store();
        store.set(keys::CATEGORIES, &Vec::<Category>::new()).unwrap();

        assert!(store.categories().seed_defaults().unwrap());

        let names: Vec<String> = store.categories().list().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["UI / UX", "Bug", "Feature Request", "Performance", "Service", "Others"]
        );
    }

    #[test]
    fn test_seed_categories_keeps_existing() {
        let store = setup_test_store();
        store.set(keys::CATEGORIES, &vec![Category::new("c1", "Billing")]).unwrap();
        assert!(!store.categories().seed_defaults().unwrap());
        assert_eq!(store.categories().list().len(), 1);
    }

    #[test]
    fn test_seed_categories_on_missing_key() {
        let store = setup_test_store();
        assert!(store.categories().seed_defaults().unwrap());
        assert_eq!(store.categories().list().len(), 6);
    }

    #[test]
    fn test_delete_category_leaves_others() {
        let store = setup_test_store();
        store.categories().seed_defaults().unwrap();
        let before = store.categories().list();

        let removed = store.categories().delete("cat_perf").unwrap();
        assert_eq!(removed.name, "Performance");

        let after = store.categories().list();
        let expected: Vec<Category> = before.into_iter().filter(|c| c.id != "cat_perf").collect();
        assert_eq!(after, expected);
    }

    #[test]
    fn test_deleting_every_category_reseeds_defaults() {
        let store = setup_test_store();
        store.categories().seed_defaults().unwrap();
        for category in store.categories().list() {
            store.categories().delete(&category.id).unwrap();
        }
        assert!(store.categories().list().is_empty());

        assert!(store.categories().seed_defaults().unwrap());
        assert_eq!(store.categories().list(), Category::defaults());
    }

    #[test]
    fn test_add_and_rename_category() {
        let store = setup_test_store();
        store.categories().seed_defaults().unwrap();
        let added = store.categories().add("Billing", at(99)).unwrap();
        assert_eq!(added.id, "cat99");
        assert_eq!(store.categories().list()[0], added);

        let renamed = store.categories().rename(&added.id, "Payments").unwrap();
        assert_eq!(renamed.name, "Payments");
        assert!(store.categories().add("   ", at(100)).is_err());
    }

    #[test]
    fn test_todo_add_then_complete() {
        let store = setup_test_store();
        let todo = store.todos().add("Review complaint #12", at(1)).unwrap();
        store.todos().set_completed(&todo.id, true).unwrap();

        let list = store.todos().list();
        assert_eq!(list.len(), 1);
        assert!(list[0].completed);
        assert_eq!(list[0].text, "Review complaint #12");

        let raw = store.backend().get_raw(keys::ADMIN_TODOS).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["completed"], true);
    }

    #[test]
    fn test_todo_clear_completed() {
        let store = setup_test_store();
        let done = store.todos().add("done", at(1)).unwrap();
        store.todos().add("open", at(2)).unwrap();
        store.todos().toggle(&done.id).unwrap();

        assert_eq!(store.todos().clear_completed().unwrap(), 1);
        assert_eq!(store.todos().list()[0].text, "open");
    }

    #[test]
    fn test_profile_edit_conflict() {
        let store = setup_test_store();
        let profiles = store.admin_profile();
        assert_eq!(profiles.get(), Profile::admin_default());

        let snapshot = profiles.edit();
        store.admin_profile().overwrite(&Profile::new("Other tab", "o@feedhub.local")).unwrap();

        let err = profiles
            .save(&snapshot, &Profile::new("Mine", "m@feedhub.local"))
            .unwrap_err();
        assert!(err.is_conflict());

        let fresh = profiles.edit();
        let saved = profiles.save(&fresh, &Profile::new("Mine", "m@feedhub.local")).unwrap();
        assert_eq!(profiles.get(), saved);
    }

    #[test]
    fn test_hidden_ids_filter_lists() {
        let store = setup_test_store();
        let hidden = store.hidden_feedback();
        hidden.hide("fb2").unwrap();
        hidden.hide("fb2").unwrap();
        assert_eq!(hidden.ids().len(), 1);

        let items: Vec<Feedback> = ["fb1", "fb2", "fb3"]
            .iter()
            .map(|id| serde_json::from_value(serde_json::json!({ "id": id })).unwrap())
            .collect();
        let visible: Vec<String> = hidden.visible(items).into_iter().map(|f| f.id).collect();
        assert_eq!(visible, vec!["fb1".to_string(), "fb3".to_string()]);
    }

    #[test]
    fn test_corrupt_collection_reads_empty_and_recovers() {
        let store = setup_test_store();
        store.backend().set_raw(keys::FEEDBACKS, "[{oops").unwrap();
        assert!(store.feedback().list().is_empty());

        store.feedback().submit(&author(), &feedback_draft("Fresh"), at(1)).unwrap();
        assert_eq!(store.feedback().list().len(), 1);
        let aside = format!("{}.unreadable", keys::FEEDBACKS);
        assert_eq!(store.backend().get_raw(&aside).unwrap().as_deref(), Some("[{oops"));
    }

    fn raw_array(store: &JsonStore<MemoryStore>, key: &str) -> Vec<serde_json::Value> {
        let raw = store.backend().get_raw(key).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_loose_feedback_survives_a_submit() {
        let store = setup_test_store();
        store
            .backend()
            .set_raw(
                keys::FEEDBACKS,
                r#"[{"id":"old1","title":"Legacy","rating":"4","status":"Closed"},
                    {"id":"old2","title":"Half star","rating":4.5}]"#,
            )
            .unwrap();

        let before = store.feedback().list();
        assert_eq!(before.len(), 2);
        assert_eq!(before[0].rating, Some(4));
        assert_eq!(before[0].status, Status::Resolved);
        assert_eq!(before[1].rating, Some(5));

        store.feedback().submit(&author(), &feedback_draft("New"), at(1)).unwrap();

        let ids: Vec<String> = store.feedback().list().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["fb1".to_string(), "old1".to_string(), "old2".to_string()]);
    }

    #[test]
    fn test_loose_complaint_survives_status_change() {
        let store = setup_test_store();
        store
            .backend()
            .set_raw(
                keys::COMPLAINTS,
                r#"[{"id":"c1","subject":"Outage","priority":"Urgent","status":"Closed"},
                    {"id":"c2","subject":"Noise","priority":"someday"}]"#,
            )
            .unwrap();

        let listed = store.complaints().list();
        assert_eq!(listed[0].priority, Priority::High);
        assert_eq!(listed[0].status, Status::Resolved);
        assert_eq!(listed[1].priority, Priority::Low);

        store.complaints().set_status("c2", Status::InProcess, "").unwrap();
        let after = store.complaints().list();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0].priority, Priority::High);
        assert_eq!(after[1].status, Status::InProcess);
    }

    #[test]
    fn test_unreadable_entry_is_kept_on_write() {
        let store = setup_test_store();
        store
            .backend()
            .set_raw(keys::FEEDBACKS, r#"[{"title":"no id"},{"id":"fb0","title":"ok"}]"#)
            .unwrap();
        assert_eq!(store.feedback().list().len(), 1);

        store.feedback().submit(&author(), &feedback_draft("New"), at(1)).unwrap();
        store.feedback().delete("fb0").unwrap();

        let raw = raw_array(&store, keys::FEEDBACKS);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["id"], "fb1");
        assert_eq!(raw[1], serde_json::json!({ "title": "no id" }));
    }

    #[test]
    fn test_delete_user_keeps_unreadable_submissions() {
        let store = setup_test_store();
        store
            .backend()
            .set_raw(keys::USERS, r#"[{"id":"u1","name":"Asha","phone":5550100,"blocked":"false"}]"#)
            .unwrap();
        store
            .backend()
            .set_raw(keys::COMPLAINTS, r#"[{"userId":"u1","subject":"no id"},{"id":"c1","userId":"u1"}]"#)
            .unwrap();

        let users = store.users().list();
        assert_eq!(users[0].phone.as_deref(), Some("5550100"));
        assert!(!users[0].blocked);

        store.users().delete("u1").unwrap();
        let raw = raw_array(&store, keys::COMPLAINTS);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["subject"], "no id");
    }

    #[test]
    fn test_seed_categories_keeps_odd_entries() {
        let store = setup_test_store();
        store.backend().set_raw(keys::CATEGORIES, r#"[{"name":"Billing"}]"#).unwrap();
        assert!(!store.categories().seed_defaults().unwrap());
        assert_eq!(raw_array(&store, keys::CATEGORIES).len(), 1);
    }
}
