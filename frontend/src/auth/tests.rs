use super::*;

fn user(stocks: &[&str]) -> UserInfo {
    UserInfo {
        email: "dream@financedream.store".into(),
        nick_name: "드림이".into(),
        stocks: stocks.iter().map(|s| s.to_string()).collect(),
        created_at: Some("2024-01-02T00:00:00Z".into()),
    }
}

#[test]
fn set_user_marks_logged_in() {
    let mut session = Session::default();
    assert!(!session.is_logged_in);

    session.set_user(user(&["삼성전자"]));
    assert!(session.is_logged_in);
    assert_eq!(session.user.as_ref().unwrap().stocks, vec!["삼성전자"]);
}

#[test]
fn update_stocks_replaces_only_the_stocks_field() {
    let mut session = Session::default();
    session.set_user(user(&["삼성전자"]));

    session.update_stocks(vec!["카카오".into(), "네이버".into()]);

    let user = session.user.as_ref().unwrap();
    assert_eq!(user.stocks, vec!["카카오", "네이버"]);
    assert_eq!(user.nick_name, "드림이");
    assert!(session.is_logged_in);
}

#[test]
fn update_stocks_without_user_is_a_noop() {
    let mut session = Session::default();
    session.update_stocks(vec!["카카오".into()]);
    assert_eq!(session, Session::default());
}

#[test]
fn clear_drops_user_and_flag_together() {
    let mut session = Session::default();
    session.set_user(user(&[]));

    session.clear();
    assert_eq!(session.user, None);
    assert!(!session.is_logged_in);
}

#[test]
fn snapshot_round_trips_with_product_keys() {
    let mut session = Session::default();
    session.set_user(user(&["삼성전자"]));

    let blob = serde_json::to_string(&session).unwrap();
    // The persisted shape uses the deployed product's key names
    assert!(blob.contains("\"isLoggedIn\":true"));
    assert!(blob.contains("\"nickName\""));

    let restored: Session = serde_json::from_str(&blob).unwrap();
    assert_eq!(restored, session);
}

#[test]
fn logged_out_snapshot_round_trips() {
    let session = Session::default();
    let blob = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&blob).unwrap();
    assert_eq!(restored.user, None);
    assert!(!restored.is_logged_in);
}
