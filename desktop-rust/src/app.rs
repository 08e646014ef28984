use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use bfhl_client_common::{
    filtered_lines, image_details, parse_data_array, pretty_json, BfhlResponse, Config, Error,
    FilterOption, ImageAttachment, SubmissionParts,
};

use crate::submit::{self, Reply};

pub struct FormApp {
    json_input: String,
    file_b64: String,
    attachment: Option<ImageAttachment>,
    show_numbers: bool,
    show_alphabets: bool,
    show_highest_lowercase: bool,
    endpoint: String,
    error: String,
    status: String,
    raw_response: String,
    response: Option<BfhlResponse>,
    sending: bool,
    submit_rx: Option<Receiver<Result<Reply, Error>>>,
}

impl Default for FormApp {
    fn default() -> Self {
        // An unreadable config file must not bypass the env override.
        let endpoint = Config::load().unwrap_or_default().resolve_endpoint();
        Self {
            json_input: String::new(),
            file_b64: String::new(),
            attachment: None,
            show_numbers: false,
            show_alphabets: false,
            show_highest_lowercase: false,
            endpoint,
            error: String::new(),
            status: String::new(),
            raw_response: String::new(),
            response: None,
            sending: false,
            submit_rx: None,
        }
    }
}

impl FormApp {
    /// Validate the form and hand the request to a worker thread.
    ///
    /// Validation failures set the error line and leave whatever
    /// response is already on screen untouched.
    fn submit(&mut self) {
        let values = match parse_data_array(&self.json_input) {
            Ok(values) => values,
            Err(err) => {
                self.error = err.user_message().to_string();
                return;
            }
        };
        let parts = match SubmissionParts::build(&values, &self.file_b64, self.attachment.clone())
        {
            Ok(parts) => parts,
            Err(err) => {
                self.error = err.user_message().to_string();
                return;
            }
        };

        let endpoint = self.endpoint.trim().to_string();
        let (tx, rx) = mpsc::channel();
        self.submit_rx = Some(rx);
        self.sending = true;
        self.error.clear();
        self.status.clear();

        std::thread::spawn(move || {
            let _ = tx.send(submit::post_form(&endpoint, parts));
        });
    }

    fn poll_messages(&mut self) {
        let Some(rx) = &self.submit_rx else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };

        self.sending = false;
        self.submit_rx = None;
        match result {
            Ok(reply) => {
                self.raw_response = pretty_json(&reply.body);
                self.response = Some(reply.decoded);
                self.error.clear();
                self.status = "Submitted".to_string();
            }
            Err(err) => {
                // Failed sends drop the stale response entirely.
                self.error = err.user_message().to_string();
                self.response = None;
                self.raw_response.clear();
                self.status.clear();
            }
        }
    }

    fn pick_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
            .pick_file()
        else {
            return;
        };
        match ImageAttachment::from_path(&path) {
            Ok(image) => {
                self.status = format!("Attached {}", image.file_name);
                self.attachment = Some(image);
            }
            Err(err) => self.status = format!("Attach failed: {err}"),
        }
    }

    fn selected_filters(&self) -> Vec<FilterOption> {
        let mut selected = Vec::new();
        if self.show_numbers {
            selected.push(FilterOption::Numbers);
        }
        if self.show_alphabets {
            selected.push(FilterOption::Alphabets);
        }
        if self.show_highest_lowercase {
            selected.push(FilterOption::HighestLowercaseAlphabet);
        }
        selected
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("API Input").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.json_input)
                .hint_text(r#"{"data": [1, 2, "a", "z"]}"#)
                .desired_rows(6)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Base64 file");
            ui.add(
                egui::TextEdit::singleline(&mut self.file_b64)
                    .hint_text("optional")
                    .desired_width(360.0),
            );
        });

        ui.horizontal(|ui| {
            if ui.button("Attach Image...").clicked() {
                self.pick_image();
            }
            let mut clear_clicked = false;
            match &self.attachment {
                Some(image) => {
                    ui.label(format!("{} ({} bytes)", image.file_name, image.bytes.len()));
                    if ui.button("Clear").clicked() {
                        clear_clicked = true;
                    }
                }
                None => {
                    ui.label(RichText::new("No image attached").color(Color32::from_gray(140)));
                }
            }
            if clear_clicked {
                self.attachment = None;
                self.status.clear();
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.sending, egui::Button::new("Submit"))
                .clicked()
            {
                self.submit();
            }
            if self.sending {
                ui.spinner();
                ui.label("Sending...");
            }
        });

        if !self.error.is_empty() {
            ui.label(RichText::new(&self.error).color(Color32::from_rgb(229, 57, 53)));
        }
        if !self.status.is_empty() {
            ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
        }
    }

    fn render_response(&mut self, ui: &mut egui::Ui) {
        let Some(response) = self.response.clone() else {
            return;
        };

        ui.label(RichText::new("Server Response").strong());
        let mut raw = self.raw_response.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut raw)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );

        ui.add_space(6.0);
        ui.label(RichText::new("Multi Filter").strong());
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_numbers, "Numbers");
            ui.checkbox(&mut self.show_alphabets, "Alphabets");
            ui.checkbox(&mut self.show_highest_lowercase, "Highest Lowercase Alphabet");
        });

        let lines = filtered_lines(&response, &self.selected_filters());
        if !lines.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new("Filtered Response").strong());
            for line in &lines {
                ui.label(line);
            }
        }

        if let Some(details) = image_details(&response) {
            ui.add_space(6.0);
            ui.label(RichText::new("Image Details").strong());
            ui.label(format!("Image Path: {}", details.path));
            if let Some(size) = &details.size_kb {
                ui.label(format!("File Size: {} KB", size));
            }
        }
    }
}

pub fn configure_fonts(ctx: &egui::Context) {
    // The JSON input can hold CJK strings; pull in a system font that covers them.
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        let Ok(data) = std::fs::read(path) else {
            continue;
        };
        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert("cjk_fallback".to_string(), FontData::from_owned(data));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .insert(0, "cjk_fallback".to_string());
        }
        ctx.set_fonts(fonts);
        return;
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.sending {
            ctx.request_repaint();
        }
        self.poll_messages();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("BFHL Form Client");
                ui.separator();
                ui.label("Endpoint");
                ui.add(egui::TextEdit::singleline(&mut self.endpoint).desired_width(340.0));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_form(ui);
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);
                self.render_response(ui);
            });
        });
    }
}
