use super::*;

#[test]
fn paths_parse_to_their_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/stocks"), AppRoute::Stocks);
    assert_eq!(AppRoute::from_path("/news"), AppRoute::News);
}

#[test]
fn unknown_paths_fall_back_to_dashboard() {
    assert_eq!(AppRoute::from_path("/does-not-exist"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
}

#[test]
fn to_path_round_trips() {
    for route in [
        AppRoute::Dashboard,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Stocks,
        AppRoute::News,
    ] {
        assert_eq!(AppRoute::from_path(route.to_path()), route);
    }
}

#[test]
fn logged_out_users_are_sent_to_login() {
    assert_eq!(AppRoute::Dashboard.guard(false), Some(AppRoute::Login));
    assert_eq!(AppRoute::Stocks.guard(false), Some(AppRoute::Login));
    assert_eq!(AppRoute::News.guard(false), Some(AppRoute::Login));
}

#[test]
fn guest_pages_allow_logged_out_users() {
    assert_eq!(AppRoute::Login.guard(false), None);
    assert_eq!(AppRoute::Register.guard(false), None);
}

#[test]
fn logged_in_users_are_bounced_off_guest_pages() {
    assert_eq!(AppRoute::Login.guard(true), Some(AppRoute::Dashboard));
    assert_eq!(AppRoute::Register.guard(true), Some(AppRoute::Dashboard));
}

#[test]
fn logged_in_users_pass_auth_pages() {
    assert_eq!(AppRoute::Dashboard.guard(true), None);
    assert_eq!(AppRoute::Stocks.guard(true), None);
    assert_eq!(AppRoute::News.guard(true), None);
}

#[test]
fn logout_flips_both_guard_directions() {
    // After logout an auth-only page redirects to login,
    // and the login page itself no longer redirects.
    assert_eq!(AppRoute::News.guard(false), Some(AppRoute::Login));
    assert_eq!(AppRoute::Login.guard(false), None);
}
