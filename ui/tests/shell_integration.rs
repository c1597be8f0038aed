use coinfolio::app::view::{ShellLayout, ShellState, render_shell};
use coinfolio::components::common::{ComponentId, DisplayOptions, Msg};
use coinfolio::components::disclosure::Disclosure;
use coinfolio::components::dropdown::Dropdown;
use coinfolio::components::header::Header;
use coinfolio::components::hit_map::HitMap;
use coinfolio::components::sidebar::Sidebar;
use coinfolio::components::stat_card::StatCard;
use coinfolio::error::ErrorReporter;
use coinfolio::pages::{Page, PageState};
use coinfolio::theme::{StyleResolver, ThemeContext, ThemeMode, ThemeStore};
use portfolio::datasets;
use std::sync::mpsc;
use std::time::Duration;
use tuirealm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tuirealm::ratatui::Terminal;
use tuirealm::ratatui::backend::TestBackend;
use tuirealm::ratatui::buffer::Buffer;
use tuirealm::ratatui::layout::Rect;
use tuirealm::{
    Application, AttrValue, Attribute, Component, EventListenerCfg, MockComponent, NoUserEvent,
};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn init_theme() {
    let _ = ThemeContext::init_global(ThemeStore::new(
        ThemeMode::Dark,
        StyleResolver::embedded(),
    ));
}

fn mounted_app(page: Page) -> Application<ComponentId, Msg, NoUserEvent> {
    let mut app = Application::init(EventListenerCfg::default());
    app.mount(ComponentId::Header, Box::new(Header::new(page)), Vec::new())
        .unwrap();
    app.mount(
        ComponentId::Sidebar,
        Box::new(Sidebar::new(page, Disclosure::Open)),
        Vec::new(),
    )
    .unwrap();
    app.mount(
        ComponentId::AccountMenu,
        Box::new(Header::account_menu()),
        Vec::new(),
    )
    .unwrap();

    let (tx, _rx) = mpsc::channel();
    page.composition()
        .mount(
            &mut app,
            &PageState::default(),
            DisplayOptions::default(),
            &ErrorReporter::new(tx),
        )
        .unwrap();
    app
}

fn render(page: Page) -> (Buffer, HitMap) {
    render_app(mounted_app(page), page)
}

fn render_app(
    mut app: Application<ComponentId, Msg, NoUserEvent>,
    page: Page,
) -> (Buffer, HitMap) {
    let focus = page.composition().focus_order()[0].clone();
    let state = ShellState {
        page,
        sidebar: Disclosure::Open,
        focus,
        editing: false,
    };

    let mut hits = HitMap::new();
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| render_shell(&mut app, frame, &state, &mut hits))
        .unwrap();
    (terminal.backend().buffer().clone(), hits)
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn click(column: u16, row: u16) -> Event<NoUserEvent> {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        modifiers: KeyModifiers::NONE,
        column,
        row,
    })
}

#[test]
fn test_dashboard_renders_inside_the_shell() {
    init_theme();
    let (buffer, hits) = render(Page::Dashboard);
    let text = buffer_text(&buffer);

    assert!(text.contains("Dashboard"));
    assert!(text.contains("Account"));
    // Sidebar lists every page
    for page in Page::ALL {
        assert!(text.contains(page.title()), "{} missing", page.title());
    }

    let layout = ShellLayout::new(Rect::new(0, 0, WIDTH, HEIGHT), Disclosure::Open);
    assert_eq!(hits.component_at(2, 10), Some(&ComponentId::Sidebar));
    assert_eq!(
        hits.component_at(layout.header.x + 1, layout.header.y + 1),
        Some(&ComponentId::Header)
    );
    // The account menu sits on top of the header's right edge
    assert_eq!(hits.component_at(WIDTH - 1, 1), Some(&ComponentId::AccountMenu));
    assert_eq!(
        hits.component_at(layout.page.x + 3, layout.page.y + 3),
        Some(&ComponentId::StatCard(0))
    );
    // The help bar is not clickable
    assert_eq!(hits.component_at(WIDTH / 2, layout.help_bar.y), None);
}

#[test]
fn test_stat_card_tooltip_draws_over_the_panels_below() {
    init_theme();
    let mut app = mounted_app(Page::Dashboard);

    let entry = datasets::dashboard_stats().remove(0);
    let mut card = StatCard::new(
        entry,
        DisplayOptions {
            tooltip_delay: Duration::ZERO,
            ..DisplayOptions::default()
        },
    );
    card.attr(Attribute::Focus, AttrValue::Flag(true));
    assert_eq!(card.on(Event::Tick), Some(Msg::ForceRedraw));
    assert!(card.tooltip_visible());
    app.remount(ComponentId::StatCard(0), Box::new(card), Vec::new())
        .unwrap();

    let (buffer, hits) = render_app(app, Page::Dashboard);
    let text = buffer_text(&buffer);
    let rows: Vec<&str> = text.lines().collect();

    for line in ["Total Balance", "Value:", "Change:", "Spot holdings plus open margin"] {
        assert!(text.contains(line), "{line} hidden");
    }

    // The tooltip hangs below the card, over the chart
    let card_area = hits.area_of(&ComponentId::StatCard(0)).unwrap();
    let detail_row = rows
        .iter()
        .position(|row| row.contains("Spot holdings plus open margin"))
        .unwrap();
    assert!(detail_row as u16 >= card_area.y + card_area.height);

    let bottom_row = detail_row as u16 + 1;
    let corner = buffer[(card_area.x, bottom_row)].symbol();
    assert!(
        matches!(corner, "└" | "╰" | "┗" | "╚"),
        "no bottom border: {}",
        rows[bottom_row as usize]
    );

    // Tooltips are not clickable, the chart underneath still is
    assert_eq!(
        hits.component_at(card_area.x + 1, bottom_row),
        Some(&ComponentId::PriceChart)
    );
}

#[test]
fn test_every_focusable_component_is_clickable() {
    init_theme();
    for page in Page::ALL {
        let (_, hits) = render(page);
        for id in page.composition().focus_order() {
            assert!(
                hits.area_of(&id).is_some(),
                "{id:?} not drawn on the {page} page"
            );
        }
    }
}

#[test]
fn test_positions_page_shows_tabs_and_search() {
    init_theme();
    let (buffer, hits) = render(Page::Positions);
    let text = buffer_text(&buffer);

    assert!(text.contains("Open"));
    assert!(text.contains("Closed"));

    let tabs = hits.area_of(&ComponentId::PositionsTabs).unwrap();
    let search = hits.area_of(&ComponentId::PositionsSearch).unwrap();
    let table = hits.area_of(&ComponentId::PositionsTable).unwrap();
    assert!(search.x > tabs.x);
    assert!(table.y > search.y);
}

#[test]
fn test_open_menu_wins_clicks_over_the_page() {
    init_theme();
    let screen = Rect::new(0, 0, WIDTH, HEIGHT);
    let layout = ShellLayout::new(screen, Disclosure::Open);
    let trigger = Header::account_menu_area(layout.header);

    let mut menu_component = Header::account_menu();
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| menu_component.view(frame, trigger))
        .unwrap();

    assert_eq!(
        menu_component.on(click(trigger.x + 1, trigger.y + 1)),
        Some(Msg::ForceRedraw)
    );
    assert!(menu_component.is_open());
    terminal
        .draw(|frame| menu_component.view(frame, trigger))
        .unwrap();

    // Page first, then the overlay, the way the shell registers them
    let menu = Dropdown::menu_area(trigger, 3, screen);
    let mut hits = HitMap::new();
    hits.register(ComponentId::MarketTable, layout.page);
    hits.register(ComponentId::AccountMenu, menu);
    assert_eq!(
        hits.component_at(menu.x + 1, menu.y + 2),
        Some(&ComponentId::AccountMenu)
    );
    assert_eq!(
        hits.component_at(layout.page.x + 1, layout.page.y + layout.page.height - 1),
        Some(&ComponentId::MarketTable)
    );

    // Second option row is "Help"
    assert_eq!(
        menu_component.on(click(menu.x + 2, menu.y + 2)),
        Some(Msg::ToggleHelpScreen)
    );
    assert!(!menu_component.is_open());
}

#[test]
fn test_outside_click_closes_the_menu_without_a_selection() {
    init_theme();
    let trigger = Rect::new(10, 2, 14, 3);
    let mut menu_component = Header::account_menu();
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

    terminal
        .draw(|frame| menu_component.view(frame, trigger))
        .unwrap();
    menu_component.on(click(trigger.x + 1, trigger.y + 1));
    terminal
        .draw(|frame| menu_component.view(frame, trigger))
        .unwrap();
    assert!(menu_component.is_open());

    assert_eq!(menu_component.on(click(100, 30)), Some(Msg::ForceRedraw));
    assert!(!menu_component.is_open());
    assert_eq!(menu_component.on(click(100, 30)), None);
}
