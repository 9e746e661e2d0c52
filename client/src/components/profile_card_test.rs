use super::*;

fn render_ana() -> String {
    let user = UserProfile { first_name: "Ana".to_owned(), coins: 42 };
    view! { <ProfileCard user/> }.to_html()
}

#[test]
fn profile_card_renders_welcome_and_balance() {
    let html = render_ana();
    assert!(html.contains("Welcome, Ana"), "{html}");
    assert!(html.contains("42"), "{html}");
}

#[test]
fn profile_card_has_no_reauthentication_control() {
    let html = render_ana();
    assert!(!html.contains("<button"), "{html}");
    assert!(!html.contains("<a"), "{html}");
    assert!(!html.contains("<form"), "{html}");
}
