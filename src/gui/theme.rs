use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::studywise()
    }
}

impl Theme {
    pub fn studywise() -> Self {
        Theme { dark: ThemeDetails::studywise_dark(), light: ThemeDetails::studywise_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn subtle(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    /// Fill for the user's chat bubbles.
    pub fn bubble_user(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent_dim
    }

    /// Fill for assistant chat bubbles and result cards.
    pub fn card(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_light
    }

    pub fn card_border(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background_lighter
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    accent: Color32,
    accent_dim: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    // Indigo-on-slate, matching the StudyWise identity.
    fn studywise_dark() -> Self {
        Self {
            background: Color32::from_rgb(17, 19, 31),
            foreground: Color32::from_rgb(226, 228, 240),
            selection: Color32::from_rgb(58, 62, 94),
            comment: Color32::from_rgb(130, 138, 176),
            red: Color32::from_rgb(240, 100, 110),
            orange: Color32::from_rgb(240, 160, 80),
            green: Color32::from_rgb(95, 200, 130),
            accent: Color32::from_rgb(129, 140, 248),
            accent_dim: Color32::from_rgb(67, 56, 202),
            background_darker: Color32::from_rgb(12, 13, 22),
            background_dark: Color32::from_rgb(22, 24, 38),
            background_light: Color32::from_rgb(33, 36, 56),
            background_lighter: Color32::from_rgb(48, 52, 78),
        }
    }

    fn studywise_light() -> Self {
        Self {
            background: Color32::from_rgb(245, 246, 252),
            foreground: Color32::from_rgb(35, 38, 52),
            selection: Color32::from_rgb(205, 210, 240),
            comment: Color32::from_rgb(120, 128, 160),
            red: Color32::from_rgb(200, 70, 80),
            orange: Color32::from_rgb(210, 130, 50),
            green: Color32::from_rgb(60, 160, 100),
            accent: Color32::from_rgb(79, 70, 229),
            accent_dim: Color32::from_rgb(199, 205, 250),
            background_darker: Color32::from_rgb(222, 224, 238),
            background_dark: Color32::from_rgb(234, 236, 248),
            background_light: Color32::from_rgb(252, 252, 255),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    weak_bg_fill: theme.background_light,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    weak_bg_fill: theme.background_lighter,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            collapsing_header_frame: true,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
