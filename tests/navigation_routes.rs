//! Every link the navbar can produce must land on a real page.

use medcenter_web::app::{has_page, Route};
use medcenter_web::auth::Session;
use medcenter_web::nav::{AuthPanel, NavItem, SiteData};

fn parse(path: &str) -> Route {
    path.parse::<Route>()
        .unwrap_or_else(|e| panic!("{path} should parse: {e}"))
}

fn menu_paths(site: &SiteData) -> Vec<String> {
    site.navigation
        .iter()
        .flat_map(|item| match item {
            NavItem::Leaf { path, .. } => vec![path.clone()],
            NavItem::Parent { children, .. } => children.iter().map(|c| c.path.clone()).collect(),
        })
        .collect()
}

#[test]
fn every_menu_link_has_a_page() {
    let site = SiteData::default();
    let paths = menu_paths(&site);
    assert!(!paths.is_empty());

    for path in paths {
        let route = parse(&path);
        assert!(
            !matches!(route, Route::NotFound { .. }),
            "{path} parsed to the not-found route"
        );
        assert!(has_page(&route, &site), "{path} has no page");
    }
}

#[test]
fn menu_links_parse_to_expected_routes() {
    assert_eq!(parse("/"), Route::Home {});
    assert_eq!(parse("/specialties"), Route::Specialties {});
    assert_eq!(
        parse("/specialties/gastroenterology"),
        Route::Specialty {
            slug: "gastroenterology".into()
        }
    );
    assert_eq!(
        parse("/about/our-team"),
        Route::About {
            slug: "our-team".into()
        }
    );
}

#[test]
fn every_panel_action_has_a_page() {
    let site = SiteData::default();
    let sessions = [Session::GUEST, Session::user(), Session::admin()];

    for session in sessions {
        for action in AuthPanel::for_session(session).actions() {
            let route = parse(action.target());
            assert!(
                has_page(&route, &site),
                "{} -> {} has no page",
                action.id,
                action.target()
            );
        }
    }
}
