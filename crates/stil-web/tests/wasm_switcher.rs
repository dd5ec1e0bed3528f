#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use stil_core::{
    ColorMapping, Document, KeyValueStorage, MountTarget, Persistence, StilError, StyleScope,
    ThemeKey, apply_all, modal,
};
use stil_web::{LocalStorage, WebPage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

fn document() -> web_sys::Document {
    window().document().expect("document")
}

fn body_property(name: &str) -> String {
    document()
        .body()
        .expect("body")
        .style()
        .get_property_value(name)
        .expect("property value")
}

#[wasm_bindgen_test]
fn web_page_sets_and_removes_body_properties() {
    let mut page = WebPage::from_window(window()).expect("page");
    let mut mapping = ColorMapping::default();
    mapping.set(ThemeKey::Dark, "#0a0b0c");

    apply_all(&mapping, &mut page, "--stil-test-");
    assert_eq!(body_property("--stil-test-dark"), "#0a0b0c");
    assert_eq!(page.computed_property("--stil-test-dark").trim(), "#0a0b0c");

    mapping.set(ThemeKey::Dark, "");
    apply_all(&mapping, &mut page, "--stil-test-");
    assert_eq!(body_property("--stil-test-dark"), "");
}

#[wasm_bindgen_test]
fn web_page_reports_missing_container() {
    let mut page = WebPage::from_window(window()).expect("page");
    let view = modal::trigger_button(&Default::default());
    let err = page
        .mount(MountTarget::Selector("#stil-no-such-container"), &view)
        .expect_err("selector matches nothing");
    assert!(matches!(err, StilError::MissingContainer { .. }));
}

#[wasm_bindgen_test]
fn web_page_mount_and_unmount_panel() {
    let mut page = WebPage::from_window(window()).expect("page");
    let view = modal::panel(&ColorMapping::default(), &Default::default());
    let id = page.mount(MountTarget::Body, &view).expect("mounted");
    assert!(document().get_element_by_id(modal::PANEL_ID).is_some());
    page.unmount(id);
    assert!(document().get_element_by_id(modal::PANEL_ID).is_none());
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    let mut persistence = Persistence::new(LocalStorage::from_window(&window()), "stil-test-record");
    let mut mapping = ColorMapping::default();
    mapping.set(ThemeKey::LightAccent, "#fedcba");
    persistence.save(&mapping).expect("saved");
    assert_eq!(persistence.load().expect("loaded"), Some(mapping));

    persistence.clear().expect("cleared");
    persistence.clear().expect("cleared twice");
    assert_eq!(
        persistence.storage().get_item("stil-test-record").expect("read"),
        None
    );
}

/// Install the widget into a footer, once per page. Later calls return the
/// existing trigger.
fn install_widget() -> HtmlElement {
    let document = document();
    if document
        .query_selector(".footer .navigation__list")
        .expect("query")
        .is_none()
    {
        let footer = document.create_element("footer").expect("footer");
        footer.set_class_name("footer");
        footer.set_inner_html(r#"<ul class="navigation__list"></ul>"#);
        document.body().expect("body").append_child(&footer).expect("append");
    }
    stil_web::init_switch_color(None).expect("installed");

    document
        .query_selector(".footer .navigation__list button")
        .expect("query")
        .expect("trigger mounted")
        .dyn_into()
        .expect("button element")
}

fn panel_button(selector: &str) -> HtmlElement {
    document()
        .query_selector(&format!("#{} > {selector}", modal::PANEL_ID))
        .expect("query")
        .expect("panel button")
        .dyn_into()
        .expect("button element")
}

fn pick_color(id: &str, value: &str) {
    let input: HtmlInputElement = document()
        .get_element_by_id(id)
        .expect("color input")
        .dyn_into()
        .expect("input element");
    input.set_value(value);
    input
        .dispatch_event(&Event::new("change").expect("event"))
        .expect("dispatched");
}

#[wasm_bindgen_test]
fn installed_widget_end_to_end() {
    let document = document();
    LocalStorage::from_window(&window())
        .remove_item("stilColors")
        .expect("clean storage");
    let trigger = install_widget();
    assert_eq!(trigger.text_content().as_deref(), Some("switch color"));

    trigger.click();
    assert!(stil_web::is_panel_open());
    assert!(document.get_element_by_id(modal::PANEL_ID).is_some());

    pick_color("primary", "#ff0000");

    assert_eq!(body_property("--ol-primary"), "#ff0000");
    let stored = LocalStorage::from_window(&window())
        .get_item("stilColors")
        .expect("read")
        .expect("record saved");
    assert!(stored.contains("#ff0000"));

    stil_web::reset();
    assert_eq!(body_property("--ol-primary"), "");
    assert_eq!(
        LocalStorage::from_window(&window())
            .get_item("stilColors")
            .expect("read"),
        None
    );
    assert!(stil_web::is_panel_open());

    stil_web::close_panel();
    assert!(document.get_element_by_id(modal::PANEL_ID).is_none());
    assert!(!stil_web::set_color("background", "#000000"));
}

#[wasm_bindgen_test]
fn panel_buttons_rerender_and_close_their_own_panel() {
    let document = document();
    install_widget().click();
    pick_color("primary", "#00ff00");
    assert_eq!(body_property("--ol-primary"), "#00ff00");

    panel_button("button:last-of-type").click();

    assert!(stil_web::is_panel_open());
    assert_eq!(body_property("--ol-primary"), "");
    let primary = document.get_element_by_id("primary").expect("re-rendered input");
    assert_eq!(primary.get_attribute("value").as_deref(), Some(""));
    assert_eq!(
        document
            .query_selector_all(&format!("#{}", modal::PANEL_ID))
            .expect("query")
            .length(),
        1
    );

    panel_button("button:first-of-type").click();

    assert!(!stil_web::is_panel_open());
    assert!(document.get_element_by_id(modal::PANEL_ID).is_none());
}
