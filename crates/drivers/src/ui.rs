use std::time::Duration;

use eframe::egui;
use folio_adapters::{
    present_category, present_created_in, present_filter, present_form_status,
    present_timeline_event, SimulatedContactTransport,
};
use folio_application::{
    ContactField, ContactForm, FeaturedWorksQuery, FooterNoticeQuery, FormStatus, Gallery,
    PortfolioService, ShowProfileQuery, ThemeSettings,
};
use folio_domain::ArtworkId;
use tracing::warn;

const WINDOW_WIDTH: f32 = 1000.0;
const WINDOW_HEIGHT: f32 = 720.0;
const CONTACT_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Page {
    const ALL: [Page; 4] = [Page::Home, Page::About, Page::Portfolio, Page::Contact];

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }
}

/// Session state of the window, kept apart from egui so it can be tested.
struct ViewState {
    page: Page,
    gallery: Gallery,
    contact: ContactForm,
    notice: Option<String>,
}

impl ViewState {
    fn new(gallery: Gallery) -> Self {
        Self {
            page: Page::Home,
            gallery,
            contact: ContactForm::new(),
            notice: None,
        }
    }

    /// Leaving the portfolio closes the detail view.
    fn open_page(&mut self, page: Page) {
        if page != Page::Portfolio {
            self.gallery.clear_selection();
        }
        self.page = page;
    }

    fn open_artwork(&mut self, id: ArtworkId) {
        self.page = Page::Portfolio;
        if !self.gallery.select(id) {
            self.notice = Some(format!("artwork {id} is not in the catalog"));
        }
    }

    fn report(&mut self, context: &str, error: impl std::fmt::Display) {
        warn!("{context}: {error}");
        self.notice = Some(format!("{context}: {error}"));
    }
}

struct PortfolioApp {
    service: PortfolioService,
    settings: ThemeSettings,
    transport: SimulatedContactTransport,
    view: ViewState,
}

impl PortfolioApp {
    fn new(
        service: PortfolioService,
        settings: ThemeSettings,
        transport: SimulatedContactTransport,
    ) -> Self {
        let view = ViewState::new(service.open_gallery());
        Self {
            service,
            settings,
            transport,
            view,
        }
    }

    fn show_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(&self.service.show_profile(ShowProfileQuery).name);
            ui.separator();
            for page in Page::ALL {
                if ui
                    .selectable_label(self.view.page == page, page.title())
                    .clicked()
                {
                    self.view.open_page(page);
                }
            }
            ui.separator();
            let label = if self.settings.mode().is_dark() {
                "Light mode"
            } else {
                "Dark mode"
            };
            if ui.button(label).clicked() {
                if let Err(error) = self.settings.toggle() {
                    self.view.report("could not save theme", error);
                }
            }
        });
    }

    fn show_home(&mut self, ui: &mut egui::Ui) {
        let profile = self.service.show_profile(ShowProfileQuery);
        ui.heading(format!("Hi, I'm {}", profile.name));
        ui.label(&profile.tagline);
        if ui.button("Explore My Work").clicked() {
            self.view.open_page(Page::Portfolio);
        }

        ui.add_space(16.0);
        ui.heading("Featured Work");
        let mut opened = None;
        for artwork in self.service.featured_works(FeaturedWorksQuery) {
            ui.group(|ui| {
                ui.strong(&artwork.title);
                ui.label(present_category(artwork.category));
                ui.label(&artwork.description);
                if ui.link("View").clicked() {
                    opened = Some(artwork.id);
                }
            });
        }
        if ui.button("View All Work").clicked() {
            self.view.open_page(Page::Portfolio);
        }
        if let Some(id) = opened {
            self.view.open_artwork(id);
        }

        ui.add_space(16.0);
        ui.heading("About Me");
        if let Some(first) = profile.bio.first() {
            ui.label(first);
        }
        if ui.button("Learn More").clicked() {
            self.view.open_page(Page::About);
        }
    }

    fn show_about(&self, ui: &mut egui::Ui) {
        let profile = self.service.show_profile(ShowProfileQuery);
        ui.heading("About Me");
        ui.label(&profile.about_intro);
        for paragraph in &profile.bio {
            ui.add_space(8.0);
            ui.label(paragraph);
        }

        ui.add_space(16.0);
        ui.heading("Artistic Journey");
        for event in profile.timeline_newest_first() {
            ui.label(present_timeline_event(event));
        }

        ui.add_space(16.0);
        ui.heading("Fun Facts");
        egui::Grid::new("fun_facts").num_columns(2).show(ui, |ui| {
            for fact in &profile.fun_facts {
                ui.strong(&fact.label);
                ui.label(&fact.text);
                ui.end_row();
            }
        });
    }

    fn show_portfolio(&mut self, ui: &mut egui::Ui) {
        ui.heading("Portfolio");
        ui.horizontal_wrapped(|ui| {
            for filter in self.view.gallery.list_categories() {
                let active = self.view.gallery.active_filter() == filter;
                if ui.selectable_label(active, present_filter(filter)).clicked() {
                    self.view.gallery.set_filter(filter);
                }
            }
        });
        ui.separator();

        let mut opened = None;
        let artworks = self.view.gallery.filtered_artworks();
        if artworks.is_empty() {
            ui.weak("No artworks in this category yet.");
        }
        for artwork in artworks {
            ui.group(|ui| {
                ui.strong(&artwork.title);
                ui.label(present_category(artwork.category));
                ui.weak(&artwork.image);
                if ui.button("View details").clicked() {
                    opened = Some(artwork.id);
                }
            });
        }
        if let Some(id) = opened {
            self.view.open_artwork(id);
        }
    }

    fn show_artwork_window(&mut self, ctx: &egui::Context) {
        let Some(artwork) = self.view.gallery.current_selection().cloned() else {
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(artwork.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.weak(&artwork.image);
                ui.label(&artwork.description);
                ui.horizontal_wrapped(|ui| {
                    for tool in &artwork.tools {
                        ui.label(egui::RichText::new(tool).monospace());
                    }
                });
                ui.weak(present_created_in(artwork.year));
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if !open || close_clicked {
            self.view.gallery.clear_selection();
        }
    }

    fn show_contact(&mut self, ui: &mut egui::Ui) {
        ui.heading("Get in Touch");
        ui.label("Let's collaborate on something amazing");
        ui.add_space(12.0);

        let submitting = self.view.contact.is_submitting();
        ui.add_enabled_ui(!submitting, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(self.view.contact.field_mut(ContactField::Name));
            ui.label("Email");
            ui.text_edit_singleline(self.view.contact.field_mut(ContactField::Email));
            ui.label("Message");
            ui.text_edit_multiline(self.view.contact.field_mut(ContactField::Message));
        });

        ui.horizontal(|ui| {
            let label = if submitting { "Sending..." } else { "Send Message" };
            if ui.add_enabled(!submitting, egui::Button::new(label)).clicked() {
                match self.view.contact.submit(&self.transport) {
                    Ok(_) => self.view.notice = None,
                    Err(error) => self.view.report("message not sent", error),
                }
            }
            if submitting && ui.button("Cancel").clicked() {
                if let Err(error) = self.view.contact.cancel(&self.transport) {
                    self.view.report("cancel failed", error);
                }
            }
        });

        match (self.view.contact.status(), present_form_status(self.view.contact.status())) {
            (FormStatus::Sent, Some(text)) => {
                ui.colored_label(egui::Color32::from_rgb(34, 139, 34), text);
            }
            (FormStatus::Failed(_), Some(text)) => {
                ui.colored_label(egui::Color32::from_rgb(200, 40, 40), text);
            }
            _ => {}
        }

        ui.add_space(16.0);
        let profile = self.service.show_profile(ShowProfileQuery);
        ui.heading("Connect With Me");
        ui.label(&profile.contact_blurb);
        for link in &profile.social_links {
            ui.hyperlink_to(&link.name, &link.url);
        }
        ui.add_space(8.0);
        ui.strong("Studio Location");
        for line in &profile.studio_address {
            ui.label(line);
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.settings.mode().is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        if self.view.contact.is_submitting() {
            if let Err(error) = self.view.contact.poll(&self.transport) {
                self.view.report("message status unavailable", error);
            }
            ctx.request_repaint_after(CONTACT_REPAINT_INTERVAL);
        }

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            self.show_navigation(ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label(self.service.footer_notice(FooterNoticeQuery));
            if let Some(notice) = &self.view.notice {
                ui.colored_label(egui::Color32::from_rgb(200, 40, 40), notice);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.view.page {
                Page::Home => self.show_home(ui),
                Page::About => self.show_about(ui),
                Page::Portfolio => self.show_portfolio(ui),
                Page::Contact => self.show_contact(ui),
            });
        });

        self.show_artwork_window(ctx);
    }
}

pub fn launch_window(
    service: PortfolioService,
    settings: ThemeSettings,
    transport: SimulatedContactTransport,
) -> Result<(), String> {
    let title = format!("{} | Portfolio", service.show_profile(ShowProfileQuery).name);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT]),
        ..Default::default()
    };
    let app = PortfolioApp::new(service, settings, transport);

    eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|error| format!("failed to start UI: {error}"))
}
