use {
    anyhow::Result,
    eframe::{Frame, egui::Context},
    std::{sync::Arc, time::Duration},
    web_time::Instant,
};

use crate::{
    Cli,
    app::Dashboard,
    data::{CoinGeckoSource, Fetcher, FixtureSource, MarketSource},
    ui::setup_custom_visuals,
};

/// Longest gap between frames while idle, so the countdown stays current.
const IDLE_REPAINT: Duration = Duration::from_secs(1);

pub struct App {
    pub(crate) dashboard: Dashboard,
    pub(crate) search_input: String,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        let source: Arc<dyn MarketSource> = match &args.fixture {
            Some(path) => Arc::new(FixtureSource::new(path)),
            None => Arc::new(CoinGeckoSource::new()?),
        };

        let repaint_ctx = cc.egui_ctx.clone();
        let fetcher = Fetcher::new(source)?.with_waker(move || repaint_ctx.request_repaint());

        Ok(Self {
            dashboard: Dashboard::new(fetcher, Instant::now()),
            search_input: String::new(),
        })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();
        self.dashboard.tick(now);

        self.render_top_panel(ctx, now);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if let Some(wait) = self.dashboard.next_poll_in(now) {
            ctx.request_repaint_after(wait.min(IDLE_REPAINT));
        }
    }
}
