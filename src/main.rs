use anyhow::Context;
use clap::Parser;
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::stack;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::Config;
use media::cache::ImageCache;
use media::preview::load_preview;
use media::thumbnail::load_thumbnail;
use state::aggregate;
use state::data::{GalleryDetail, GalleryId};
use state::filter::{LocationChoice, YearChoice};
use state::navigator::Navigator;
use state::notice::NoticeBoard;
use state::portfolio::Portfolio;
use state::store::Store;
use state::sync::{self, PollTrigger, SyncOutcome};

const UPDATE_NOTICE: &str = "Gallery updated with new content!";

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "photo-portfolio")]
#[command(about = "Browse a local photo portfolio")]
#[command(version)]
struct Args {
    /// Store file holding galleryPhotos and galleryCovers
    #[arg(short, long, env = "PORTFOLIO_STORE")]
    store: Option<PathBuf>,

    /// Open this gallery directly instead of the index
    #[arg(short, long)]
    gallery: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,
}

/// Which page is on screen
enum Page {
    Index,
    Gallery {
        detail: GalleryDetail,
        navigator: Navigator,
    },
}

/// Main application state
struct PortfolioApp {
    /// Read-only view of the admin tool's data
    store: Store,
    config: Config,
    cache_root: PathBuf,
    /// Index page snapshot, kept current by the change detector
    portfolio: Portfolio,
    page: Page,
    notices: NoticeBoard,
    thumbnails: ImageCache,
    previews: ImageCache,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Time to re-read the store
    Poll(PollTrigger),
    YearSelected(YearChoice),
    LocationSelected(LocationChoice),
    ClearFilters,
    /// User clicked a gallery card
    OpenGallery(GalleryId),
    BackToIndex,
    /// User clicked a photo thumbnail
    OpenPhoto(usize),
    PreviousPhoto,
    NextPhoto,
    ClosePhoto,
    /// Click that must not fall through to the lightbox backdrop
    Ignore,
    DismissNotice,
    NoticeExpired(u64),
    ThumbnailLoaded(String, Result<PathBuf, String>),
    PreviewLoaded(String, Result<PathBuf, String>),
}

impl PortfolioApp {
    /// Create a new instance of the application.
    /// `gallery` opens that gallery's page instead of the index.
    fn new(
        store: Store,
        config: Config,
        cache_root: PathBuf,
        gallery: Option<GalleryId>,
    ) -> error::Result<Self> {
        let portfolio = Portfolio::new(aggregate::load_galleries(&store)?);
        let page = match gallery {
            Some(id) => Page::Gallery {
                detail: aggregate::gallery_detail(&store, Some(&id))?,
                navigator: Navigator::default(),
            },
            None => Page::Index,
        };

        info!(
            "🎨 Portfolio initialized with {} galleries",
            portfolio.galleries().len()
        );

        Ok(PortfolioApp {
            store,
            config,
            cache_root,
            portfolio,
            page,
            notices: NoticeBoard::default(),
            thumbnails: ImageCache::default(),
            previews: ImageCache::default(),
        })
    }

    fn title(&self) -> String {
        match &self.page {
            Page::Index => "Photography Portfolio".to_string(),
            Page::Gallery { detail, .. } => format!("{} - Photography Portfolio", detail.name),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Poll(trigger) => {
                if !matches!(self.page, Page::Index) {
                    return Task::none();
                }
                match sync::check_for_updates(&self.store, &mut self.portfolio, trigger) {
                    Ok(SyncOutcome::Changed { previous, current }) => {
                        info!("🔄 Gallery updated: {} → {} galleries", previous, current);
                        let notice = self.notices.post(UPDATE_NOTICE);
                        let expiry = self.config.notification_duration();
                        Task::batch([
                            self.load_page_images(),
                            Task::perform(tokio::time::sleep(expiry), move |_| {
                                Message::NoticeExpired(notice)
                            }),
                        ])
                    }
                    Ok(_) => Task::none(),
                    Err(e) => {
                        error!("❌ Update check failed for {}: {}", self.store.path().display(), e);
                        Task::none()
                    }
                }
            }
            Message::YearSelected(choice) => {
                self.portfolio.select_year(choice.year());
                Task::none()
            }
            Message::LocationSelected(choice) => {
                self.portfolio.select_location(choice.location());
                Task::none()
            }
            Message::ClearFilters => {
                self.portfolio.clear_filters();
                Task::none()
            }
            Message::OpenGallery(id) => match aggregate::gallery_detail(&self.store, Some(&id)) {
                Ok(detail) => {
                    info!("📂 Opening gallery {} ({} photos)", detail.id, detail.photos.len());
                    self.page = Page::Gallery {
                        detail,
                        navigator: Navigator::default(),
                    };
                    self.load_page_images()
                }
                Err(e) => {
                    error!("❌ Could not open gallery {}: {}", id, e);
                    Task::none()
                }
            },
            Message::BackToIndex => {
                self.page = Page::Index;
                // Coming back shows the store as it is now, like a fresh page load
                match aggregate::load_galleries(&self.store) {
                    Ok(galleries) if galleries.as_slice() != self.portfolio.galleries() => {
                        self.portfolio.replace(galleries);
                    }
                    Ok(_) => {}
                    Err(e) => error!("❌ Could not reload galleries: {}", e),
                }
                self.load_page_images()
            }
            Message::OpenPhoto(index) => {
                if let Page::Gallery { detail, navigator } = &mut self.page {
                    navigator.open(index, detail.photos.len());
                }
                self.load_current_preview()
            }
            Message::PreviousPhoto => {
                if let Page::Gallery { navigator, .. } = &mut self.page {
                    navigator.previous();
                }
                self.load_current_preview()
            }
            Message::NextPhoto => {
                if let Page::Gallery { detail, navigator } = &mut self.page {
                    navigator.next(detail.photos.len());
                }
                self.load_current_preview()
            }
            Message::ClosePhoto => {
                if let Page::Gallery { navigator, .. } = &mut self.page {
                    navigator.close();
                }
                Task::none()
            }
            Message::Ignore => Task::none(),
            Message::DismissNotice => {
                self.notices.dismiss();
                Task::none()
            }
            Message::NoticeExpired(id) => {
                self.notices.expire(id);
                Task::none()
            }
            Message::ThumbnailLoaded(source, result) => {
                if let Err(e) = &result {
                    warn!("⚠️  Thumbnail failed for {}: {}", source, e);
                }
                self.thumbnails.resolve(source, result);
                Task::none()
            }
            Message::PreviewLoaded(source, result) => {
                if let Err(e) = &result {
                    warn!("⚠️  Full-size image failed for {}: {}", source, e);
                }
                self.previews.resolve(source, result);
                Task::none()
            }
        }
    }

    /// Start thumbnail loads for everything the current page shows
    fn load_page_images(&mut self) -> Task<Message> {
        let sources: Vec<String> = match &self.page {
            Page::Index => self
                .portfolio
                .galleries()
                .iter()
                .filter_map(|g| g.card_image())
                .map(str::to_string)
                .collect(),
            Page::Gallery { detail, .. } => detail
                .photos
                .iter()
                .filter_map(|p| p.grid_image())
                .map(str::to_string)
                .collect(),
        };

        let cache_root = self.cache_root.clone();
        let size = self.config.thumbnail_size;
        Task::batch(self.thumbnails.claim(sources).into_iter().map(|source| {
            Task::perform(
                load_thumbnail(source.clone(), cache_root.clone(), size),
                move |result| Message::ThumbnailLoaded(source.clone(), result),
            )
        }))
    }

    /// Start loading the full-size image under the lightbox, if any
    fn load_current_preview(&mut self) -> Task<Message> {
        let source = match &self.page {
            Page::Gallery { detail, navigator } => navigator
                .index()
                .and_then(|i| detail.photos.get(i))
                .and_then(|photo| photo.image.clone()),
            Page::Index => None,
        };
        let Some(source) = source else {
            return Task::none();
        };

        let cache_root = self.cache_root.clone();
        Task::batch(self.previews.claim([source]).into_iter().map(|source| {
            Task::perform(
                load_preview(source.clone(), cache_root.clone()),
                move |result| Message::PreviewLoaded(source.clone(), result),
            )
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let page: Element<'_, Message> = match &self.page {
            Page::Index => ui::grid::view(&self.portfolio, &self.thumbnails),
            Page::Gallery { detail, navigator } => {
                let viewer = ui::viewer::view(detail, &self.thumbnails);
                match navigator.index() {
                    Some(index) => stack![
                        viewer,
                        ui::fullscreen::view(detail, index, &self.previews, &self.thumbnails),
                    ]
                    .into(),
                    None => viewer,
                }
            }
        };

        match self.notices.current() {
            Some(notice) => stack![page, ui::notification::view(notice)].into(),
            None => page,
        }
    }

    /// Timer and focus checks on the index; arrow keys while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        match &self.page {
            Page::Index => Subscription::batch([
                time::every(self.config.poll_interval()).map(|_| Message::Poll(PollTrigger::Interval)),
                event::listen_with(window_focus),
            ]),
            Page::Gallery { navigator, .. } if navigator.is_open() => {
                keyboard::on_key_press(lightbox_key)
            }
            Page::Gallery { .. } => Subscription::none(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn window_focus(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Focused) => Some(Message::Poll(PollTrigger::Focus)),
        _ => None,
    }
}

fn lightbox_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::ClosePhoto),
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousPhoto),
        Key::Named(Named::ArrowRight) => Some(Message::NextPhoto),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("photo_portfolio={}", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = config_path.filter(|p| p.exists()) {
        info!("⚙️  Loaded config from {}", path.display());
    }

    let store_path = match args.store {
        Some(path) => path,
        None => config.store_path()?,
    };
    let store = Store::open(&store_path)
        .with_context(|| format!("Failed to open store at {}", store_path.display()))?;
    let cache_root = config.cache_root()?;
    let gallery = args.gallery.as_deref().map(GalleryId::new);

    let mut app = PortfolioApp::new(store, config, cache_root, gallery)
        .context("Failed to load galleries")?;

    iced::application(PortfolioApp::title, PortfolioApp::update, PortfolioApp::view)
        .subscription(PortfolioApp::subscription)
        .theme(PortfolioApp::theme)
        .centered()
        .run_with(move || {
            let task = app.load_page_images();
            (app, task)
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::store::{COVERS_KEY, PHOTOS_KEY};

    const PHOTOS: &str = r#"[
        {"id": 1, "galleryId": 5, "galleryName": "Coast", "image": "a.jpg", "year": 2023},
        {"id": 2, "galleryId": 5, "image": "b.jpg"},
        {"id": 3, "galleryId": 7, "galleryName": "Peaks", "image": "c.jpg", "year": 2021}
    ]"#;
    const NEW_COVER: &str = r#"[{"galleryId": 5, "coverPhoto": {"image": "new.jpg"}}]"#;

    /// Notice timers need a tokio time driver while `update` builds them
    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap()
    }

    fn app(cache: &tempfile::TempDir) -> PortfolioApp {
        let store = Store::open_in_memory().unwrap();
        store.set_item(PHOTOS_KEY, PHOTOS).unwrap();
        PortfolioApp::new(store, Config::default(), cache.path().to_path_buf(), None).unwrap()
    }

    fn lightbox_index(app: &PortfolioApp) -> Option<usize> {
        match &app.page {
            Page::Gallery { navigator, .. } => navigator.index(),
            Page::Index => None,
        }
    }

    #[test]
    fn test_changed_store_posts_one_notice_and_resets_filters() {
        let runtime = runtime();
        let _guard = runtime.enter();
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        let _ = app.update(Message::YearSelected(YearChoice::Year(2023)));
        assert_eq!(app.portfolio.visible().len(), 1);

        app.store.set_item(COVERS_KEY, NEW_COVER).unwrap();
        for _ in 0..3 {
            let _ = app.update(Message::Poll(PollTrigger::Interval));
        }

        assert_eq!(app.notices.current().map(|n| n.id), Some(1));
        assert_eq!(app.notices.current().map(|n| n.message.as_str()), Some(UPDATE_NOTICE));
        assert!(app.portfolio.selection().is_empty());
        assert_eq!(app.portfolio.visible().len(), 2);
        assert_eq!(app.portfolio.galleries()[0].cover_image.as_deref(), Some("new.jpg"));
    }

    #[test]
    fn test_unchanged_store_posts_nothing() {
        let runtime = runtime();
        let _guard = runtime.enter();
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        let _ = app.update(Message::Poll(PollTrigger::Interval));
        let _ = app.update(Message::Poll(PollTrigger::Focus));

        assert!(app.notices.current().is_none());
    }

    #[test]
    fn test_notice_expiry_ignores_stale_timers() {
        let runtime = runtime();
        let _guard = runtime.enter();
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        app.store.set_item(COVERS_KEY, NEW_COVER).unwrap();
        let _ = app.update(Message::Poll(PollTrigger::Interval));
        app.store.set_item(COVERS_KEY, "[]").unwrap();
        let _ = app.update(Message::Poll(PollTrigger::Focus));
        assert_eq!(app.notices.current().map(|n| n.id), Some(2));

        let _ = app.update(Message::NoticeExpired(1));
        assert_eq!(app.notices.current().map(|n| n.id), Some(2));

        let _ = app.update(Message::NoticeExpired(2));
        assert!(app.notices.current().is_none());
    }

    #[test]
    fn test_notice_can_be_dismissed() {
        let runtime = runtime();
        let _guard = runtime.enter();
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        app.store.set_item(COVERS_KEY, NEW_COVER).unwrap();
        let _ = app.update(Message::Poll(PollTrigger::Interval));
        let _ = app.update(Message::DismissNotice);

        assert!(app.notices.current().is_none());
    }

    #[test]
    fn test_gallery_page_does_not_poll() {
        let runtime = runtime();
        let _guard = runtime.enter();
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        let _ = app.update(Message::OpenGallery(GalleryId::from(5)));
        assert_eq!(app.title(), "Coast - Photography Portfolio");

        app.store.set_item(COVERS_KEY, NEW_COVER).unwrap();
        let _ = app.update(Message::Poll(PollTrigger::Interval));
        assert!(app.notices.current().is_none());
        assert_eq!(app.portfolio.galleries()[0].cover_image.as_deref(), Some("a.jpg"));

        // Back on the index the new data shows without a notice
        let _ = app.update(Message::BackToIndex);
        assert_eq!(app.title(), "Photography Portfolio");
        assert!(app.notices.current().is_none());
        assert_eq!(app.portfolio.galleries()[0].cover_image.as_deref(), Some("new.jpg"));
    }

    #[test]
    fn test_lightbox_navigation_stops_at_the_ends() {
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        let _ = app.update(Message::OpenGallery(GalleryId::from(5)));
        let _ = app.update(Message::OpenPhoto(0));
        assert_eq!(lightbox_index(&app), Some(0));

        let _ = app.update(Message::PreviousPhoto);
        let _ = app.update(Message::Ignore);
        assert_eq!(lightbox_index(&app), Some(0));

        let _ = app.update(Message::NextPhoto);
        let _ = app.update(Message::NextPhoto);
        assert_eq!(lightbox_index(&app), Some(1));

        let _ = app.update(Message::ClosePhoto);
        assert_eq!(lightbox_index(&app), None);
    }

    #[test]
    fn test_out_of_range_photo_stays_closed() {
        let cache = tempfile::tempdir().unwrap();
        let mut app = app(&cache);

        let _ = app.update(Message::OpenGallery(GalleryId::from(5)));
        let _ = app.update(Message::OpenPhoto(9));

        assert_eq!(lightbox_index(&app), None);
    }

    #[test]
    fn test_lightbox_keys() {
        assert!(matches!(
            lightbox_key(Key::Named(Named::Escape), Modifiers::empty()),
            Some(Message::ClosePhoto)
        ));
        assert!(matches!(
            lightbox_key(Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(Message::PreviousPhoto)
        ));
        assert!(matches!(
            lightbox_key(Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(Message::NextPhoto)
        ));
        assert!(lightbox_key(Key::Character("a".into()), Modifiers::empty()).is_none());
    }
}
