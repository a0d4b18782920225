mod data;
mod handlers;
mod views;

use cosmic::{
    Application, ApplicationExt, Element, action,
    app::{Core, Task, context_drawer},
    cosmic_config::{self},
    executor,
    iced::{
        Alignment, Length, Size, Subscription,
        widget::scrollable,
        window::{self},
    },
    theme,
    widget::{self},
};
use std::{
    cell::Cell,
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use crate::catalog::Catalog;
use crate::cli::Flags;
use crate::config::{AppTheme, Config, Favorites, Language};
use crate::constants::MAX_GRID_WIDTH;
use crate::key_bind::{KeyBind, key_binds};
use crate::localize;
use crate::pages::{ContextPage, DetailsPage, DialogPage, NavPage};
use crate::promotions::Promotion;
use crate::scroll_context::ScrollContext;
use crate::ui;
use crate::viewport::ViewportTransform;

use crate::fl;

use crate::message::{Action, Message};

pub struct App {
    pub(crate) core: Core,
    pub(crate) config_handler: Option<cosmic_config::Config>,
    pub(crate) config: Config,
    pub(crate) favorites_handler: Option<cosmic_config::Config>,
    pub(crate) favorites: Favorites,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) app_themes: Vec<String>,
    pub(crate) language_names: Vec<String>,
    pub(crate) context_page: ContextPage,
    pub(crate) dialog_pages: VecDeque<DialogPage>,
    pub(crate) key_binds: HashMap<KeyBind, Action>,
    pub(crate) nav_model: widget::nav_bar::Model,
    pub(crate) scrollable_id: widget::Id,
    pub(crate) classic_id: widget::Id,
    pub(crate) scroll_views: HashMap<ScrollContext, scrollable::Viewport>,
    pub(crate) search_active: bool,
    pub(crate) search_id: widget::Id,
    pub(crate) search_input: String,
    pub(crate) search_results: Option<(String, Vec<u32>)>,
    pub(crate) details_page_opt: Option<DetailsPage>,
    pub(crate) classic_transform: ViewportTransform,
    pub(crate) classic_size: Cell<Option<Size>>,
    pub(crate) promotion: Option<Promotion>,
    pub(crate) size: Cell<Option<Size>>,
}

fn build_nav_model(active: NavPage) -> widget::nav_bar::Model {
    let mut nav_model = widget::nav_bar::Model::default();
    for &nav_page in NavPage::all() {
        let id = nav_model
            .insert()
            .icon(nav_page.icon())
            .text(nav_page.title())
            .data::<NavPage>(nav_page)
            .id();
        if nav_page == active {
            nav_model.activate(id);
        }
    }
    nav_model
}

impl App {
    pub(crate) fn active_nav_page(&self) -> NavPage {
        self.nav_model
            .active_data::<NavPage>()
            .map_or(NavPage::default(), |nav_page| *nav_page)
    }

    pub(crate) fn search(&self) -> Task<Message> {
        data::search_task(self.catalog.clone(), self.search_input.clone())
    }

    pub(crate) fn select(&mut self, atomic_number: u32) -> Task<Message> {
        log::info!("selected element {}", atomic_number);
        self.details_page_opt = Some(DetailsPage::new(atomic_number));
        self.update_scroll()
    }

    pub(crate) fn scroll_context(&self) -> ScrollContext {
        if self.details_page_opt.is_some() {
            ScrollContext::DetailsPage
        } else if self.search_results.is_some() {
            ScrollContext::SearchResults
        } else {
            ScrollContext::NavPage
        }
    }

    pub(crate) fn update_scroll(&mut self) -> Task<Message> {
        let scroll_context = self.scroll_context();
        // Clear unused scroll contexts
        for remove_context in scroll_context.unused_contexts() {
            self.scroll_views.remove(remove_context);
        }
        scrollable::scroll_to(
            self.scrollable_id.clone(),
            match self.scroll_views.get(&scroll_context) {
                Some(viewport) => viewport.absolute_offset(),
                None => scrollable::AbsoluteOffset::default(),
            },
        )
    }

    pub(crate) fn update_config(&mut self) -> Task<Message> {
        cosmic::command::set_theme(self.config.app_theme.theme())
    }

    /// Re-select the UI language and rebuild everything that caches
    /// localized strings
    pub(crate) fn apply_language(&mut self) {
        localize::set_language(self.config.language);
        self.app_themes = vec![fl!("match-desktop"), fl!("dark"), fl!("light")];
        self.language_names = Language::all()
            .iter()
            .map(|language| language.title())
            .collect();
        // Nav titles are cached inside the model
        self.nav_model = build_nav_model(self.active_nav_page());
    }

    /// Viewport used for classic-view gesture bounds; falls back to the
    /// window content size before the first classic render
    pub(crate) fn classic_viewport(&self) -> Size {
        self.classic_size
            .get()
            .or(self.size.get())
            .unwrap_or(Size::new(1280.0, 720.0))
    }

    /// Push the transform's offset into the classic scrollable
    pub(crate) fn classic_scroll_task(&self) -> Task<Message> {
        let scroll = self
            .classic_transform
            .scroll_position(self.classic_viewport());
        scrollable::scroll_to(
            self.classic_id.clone(),
            scrollable::AbsoluteOffset {
                x: scroll.x,
                y: scroll.y,
            },
        )
    }

    pub(crate) fn handle_config_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_config_message(self, message)
    }

    pub(crate) fn handle_search_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_search_message(self, message)
    }

    pub(crate) fn handle_selection_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_selection_message(self, message)
    }

    pub(crate) fn handle_classic_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_classic_message(self, message)
    }

    pub(crate) fn handle_dialog_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_dialog_message(self, message)
    }

    fn update_title(&mut self) -> Task<Message> {
        if let Some(window_id) = &self.core.main_window_id() {
            self.set_window_title(fl!("app-name"), *window_id)
        } else {
            Task::none()
        }
    }

    pub(crate) fn settings(&self) -> Element<'_, Message> {
        let app_theme_selected = match self.config.app_theme {
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
            AppTheme::System => 0,
        };
        let language_selected = Language::all()
            .iter()
            .position(|language| *language == self.config.language);
        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(
                    widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                        &self.app_themes,
                        Some(app_theme_selected),
                        move |index| {
                            Message::AppTheme(match index {
                                1 => AppTheme::Dark,
                                2 => AppTheme::Light,
                                _ => AppTheme::System,
                            })
                        },
                    )),
                )
                .into(),
            widget::settings::section()
                .title(fl!("language"))
                .add(
                    widget::settings::item::builder(fl!("language")).control(widget::dropdown(
                        &self.language_names,
                        language_selected,
                        move |index| {
                            Message::Language(
                                Language::all().get(index).copied().unwrap_or_default(),
                            )
                        },
                    )),
                )
                .into(),
        ])
        .into()
    }

    fn view_classic(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        widget::column::with_children(vec![
            ui::classic::classic_toolbar(&self.classic_transform, &spacing),
            widget::responsive(move |size| {
                self.classic_size.set(Some(size));
                ui::classic::classic_table(
                    &self.catalog,
                    self.config.language,
                    &self.classic_transform,
                    self.classic_id.clone(),
                )
            })
            .into(),
            widget::container(ui::legend::legend_row(&spacing))
                .padding([spacing.space_xs, spacing.space_s])
                .width(Length::Fill)
                .into(),
        ])
        .into()
    }

    fn view_responsive(&self, size: Size) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let grid_width = (size.width - 2.0 * spacing.space_s as f32).floor().max(0.0) as usize;
        let language = self.config.language;

        match &self.details_page_opt {
            Some(details_page) => match self.catalog.by_number(details_page.atomic_number) {
                Some(record) => details_page.view(
                    record,
                    language,
                    self.favorites.contains(record.atomic_number),
                    self.promotion.as_ref(),
                    spacing,
                    grid_width,
                ),
                // Selected before the catalog finished loading
                None => widget::text::body(fl!("loading")).into(),
            },
            None => match &self.search_results {
                Some((input, results)) => views::render_search_results(
                    input,
                    results,
                    &self.catalog,
                    language,
                    &self.favorites,
                    spacing,
                    grid_width,
                ),
                None => match self.active_nav_page() {
                    NavPage::Favorites => views::render_favorites_page(
                        &self.catalog,
                        &self.favorites,
                        language,
                        spacing,
                        grid_width,
                    ),
                    // The classic table is routed in view(); anything else
                    // shows the scrolling grid
                    _ => views::render_grid_page(&self.catalog, language, spacing, grid_width),
                },
            },
        }
    }
}

/// Implement [`Application`] to integrate with COSMIC.
impl Application for App {
    /// Multithreaded async executor to use with the app.
    type Executor = executor::multi::Executor;

    /// Argument received
    type Flags = Flags;

    /// Message type specific to our [`App`].
    type Message = Message;

    /// The unique application ID to supply to the window manager.
    const APP_ID: &'static str = "com.sandeep.AtomicGuru";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Creates the application, and optionally emits command on initialize.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let locale = sys_locale::get_locale().unwrap_or_else(|| {
            log::warn!("failed to get system locale, falling back to en-US");
            String::from("en-US")
        });

        let app_themes = vec![fl!("match-desktop"), fl!("dark"), fl!("light")];
        let language_names = Language::all()
            .iter()
            .map(|language| language.title())
            .collect();

        let nav_model = build_nav_model(NavPage::default());

        let mut dialog_pages = VecDeque::new();
        if flags.config.first_launch {
            // Preselect from the system locale; the persisted choice wins on
            // later launches
            dialog_pages.push_back(DialogPage::LanguageSelect(Language::from_locale(&locale)));
        }

        let mut app = App {
            core,
            config_handler: flags.config_handler,
            config: flags.config,
            favorites_handler: flags.favorites_handler,
            favorites: flags.favorites,
            catalog: Arc::new(Catalog::default()),
            app_themes,
            language_names,
            context_page: ContextPage::Settings,
            dialog_pages,
            key_binds: key_binds(),
            nav_model,
            scrollable_id: widget::Id::unique(),
            classic_id: widget::Id::unique(),
            scroll_views: HashMap::new(),
            search_active: false,
            search_id: widget::Id::unique(),
            search_input: String::new(),
            search_results: None,
            details_page_opt: None,
            classic_transform: ViewportTransform::default(),
            classic_size: Cell::new(None),
            promotion: None,
            size: Cell::new(None),
        };

        if let Some(subcommand) = flags.subcommand_opt {
            // Search term or deep link; resolved once the catalog is loaded
            app.search_active = true;
            app.search_input = subcommand;
        }

        let command = Task::batch([
            app.update_title(),
            data::load_catalog_task(),
            data::load_promotion_task(),
        ]);
        (app, command)
    }

    fn nav_model(&self) -> Option<&widget::nav_bar::Model> {
        Some(&self.nav_model)
    }

    #[cfg(feature = "single-instance")]
    fn dbus_activation(&mut self, msg: cosmic::dbus_activation::Message) -> Task<Message> {
        let mut tasks = Vec::with_capacity(2);
        if self.core.main_window_id().is_none() {
            // Create window if required
            let (window_id, task) = window::open(window::Settings {
                min_size: Some(Size::new(420.0, 300.0)),
                decorations: false,
                exit_on_close_request: false,
                ..Default::default()
            });
            self.core.set_main_window_id(Some(window_id));
            tasks.push(task.map(|_id| action::none()));
        }
        if let cosmic::dbus_activation::Details::ActivateAction { action, .. } = msg.msg {
            // Search term or deep link from another instance
            self.search_active = true;
            self.search_input = action;
            tasks.push(self.search());
        }
        Task::batch(tasks)
    }

    fn on_app_exit(&mut self) -> Option<Message> {
        Some(Message::WindowClose)
    }

    fn on_escape(&mut self) -> Task<Message> {
        if self.core.window.show_context {
            // Close context drawer if open
            self.core.window.show_context = false;
        } else if self.search_active {
            // Close search if open
            self.search_active = false;
            if self.search_results.take().is_some() {
                return self.update_scroll();
            }
        } else if self.details_page_opt.take().is_some() {
            return self.update_scroll();
        }
        Task::none()
    }

    fn on_nav_select(&mut self, id: widget::nav_bar::Id) -> Task<Message> {
        self.search_active = false;
        self.search_results = None;
        self.details_page_opt = None;
        self.nav_model.activate(id);
        let mut commands = Vec::with_capacity(2);
        self.scroll_views.clear();
        commands.push(self.update_scroll());
        if let Some(NavPage::ClassicTable) = self.nav_model.active_data::<NavPage>() {
            // Re-fit the table when entering the classic view
            commands.push(self.update(Message::ClassicFit));
        }
        Task::batch(commands)
    }

    /// Handle application events here.
    fn update(&mut self, message: Self::Message) -> Task<Message> {
        handlers::update(self, message)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::Settings => context_drawer::context_drawer(
                self.settings(),
                Message::ToggleContextPage(ContextPage::Settings),
            )
            .title(fl!("settings")),
        })
    }

    fn dialog(&self) -> Option<Element<'_, Message>> {
        let dialog_page = self.dialog_pages.front()?;
        views::render_dialog(dialog_page)
    }

    fn header_start(&self) -> Vec<Element<'_, Message>> {
        views::render_header_start(self.search_active, &self.search_input, self.search_id.clone())
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        views::render_header_end()
    }

    /// Creates a view after each update.
    fn view(&self) -> Element<'_, Self::Message> {
        widget::responsive(move |mut size| {
            size.width = size.width.min(MAX_GRID_WIDTH);
            self.size.set(Some(size));
            if self.details_page_opt.is_none()
                && self.search_results.is_none()
                && self.active_nav_page() == NavPage::ClassicTable
            {
                // The classic table manages its own viewport
                self.view_classic()
            } else {
                widget::scrollable(
                    widget::container(
                        widget::container(self.view_responsive(size)).max_width(MAX_GRID_WIDTH),
                    )
                    .align_x(Alignment::Center),
                )
                .id(self.scrollable_id.clone())
                .on_scroll(Message::ScrollView)
                .into()
            }
        })
        .into()
    }

    fn view_window(&self, _id: window::Id) -> Element<'_, Message> {
        // When closing the main window, view_window may be called after the main window is unset
        widget::horizontal_space().into()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        handlers::subscription(self)
    }
}
