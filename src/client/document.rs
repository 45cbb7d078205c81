//! In-memory page state: what the browser would hold in its DOM.

use super::views::{self, escape, SelectOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Appointments,
    Patients,
    Booking,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Appointments, Section::Patients, Section::Booking];

    pub fn key(self) -> &'static str {
        match self {
            Section::Appointments => "citas",
            Section::Patients => "pacientes",
            Section::Booking => "agendar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Appointments => "Citas Guardadas",
            Section::Patients => "Pacientes",
            Section::Booking => "Agendar Cita",
        }
    }

    pub fn button_id(self) -> String {
        format!("btn-{}", self.key())
    }

    pub fn section_id(self) -> String {
        format!("seccion-{}", self.key())
    }

    /// `btn-citas` -> `Section::Appointments`.
    pub fn from_button_id(id: &str) -> Option<Self> {
        let key = id.splitn(2, '-').nth(1)?;
        Self::ALL.iter().copied().find(|section| section.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section: Section,
    pub button_active: bool,
    pub section_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: String,
    pub telefono: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub id_paciente: String,
    pub id_medico: String,
    pub fecha_hora: String,
    pub motivo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nav: Vec<NavEntry>,
    /// `#cuerpo-tabla-citas`
    pub appointments_body: String,
    /// `#resultados-busqueda`
    pub search_results: String,
    pub patient_options: Vec<SelectOption>,
    pub doctor_options: Vec<SelectOption>,
    pub register_form: RegisterForm,
    pub search_input: String,
    pub booking_form: BookingForm,
    alerts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A fresh page shows the appointments section.
    pub fn new() -> Self {
        let nav = Section::ALL
            .iter()
            .map(|&section| NavEntry {
                section,
                button_active: section == Section::Appointments,
                section_active: section == Section::Appointments,
            })
            .collect();
        Self {
            nav,
            appointments_body: String::new(),
            search_results: String::new(),
            patient_options: Vec::new(),
            doctor_options: Vec::new(),
            register_form: RegisterForm::default(),
            search_input: String::new(),
            booking_form: BookingForm::default(),
            alerts: Vec::new(),
        }
    }

    /// Clears every flag before setting the requested one, so at most one
    /// section is ever active.
    pub fn activate(&mut self, section: Section) {
        for entry in self.nav.iter_mut() {
            entry.button_active = false;
            entry.section_active = false;
        }
        for entry in self.nav.iter_mut().filter(|entry| entry.section == section) {
            entry.button_active = true;
            entry.section_active = true;
        }
    }

    pub fn active_sections(&self) -> Vec<Section> {
        self.nav
            .iter()
            .filter(|entry| entry.section_active)
            .map(|entry| entry.section)
            .collect()
    }

    pub fn alert<S: Into<String>>(&mut self, message: S) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Hands the pending alerts to whoever shows them.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn render_section(&self, section: Section) -> String {
        let active = self
            .nav
            .iter()
            .any(|entry| entry.section == section && entry.section_active);
        let class = if active { "seccion activa" } else { "seccion" };
        format!(
            r#"<section id="{}" class="{}"><h2>{}</h2>{}</section>"#,
            section.section_id(),
            class,
            section.title(),
            self.section_body(section)
        )
    }

    fn section_body(&self, section: Section) -> String {
        match section {
            Section::Appointments => format!(
                r#"<table><thead><tr><th>Fecha y Hora</th><th>Paciente</th><th>Médico</th><th>Motivo</th><th>Estado</th></tr></thead><tbody id="cuerpo-tabla-citas">{}</tbody></table>"#,
                self.appointments_body
            ),
            Section::Patients => {
                let form = &self.register_form;
                format!(
                    concat!(
                        r#"<form id="form-registrar">"#,
                        r#"<input id="nombre" value="{}" required>"#,
                        r#"<input id="apellido" value="{}" required>"#,
                        r#"<input id="fecha_nacimiento" type="date" value="{}" required>"#,
                        r#"<input id="telefono" value="{}" required>"#,
                        r#"<button type="submit">Registrar</button></form>"#,
                        r#"<form id="form-buscar"><input id="input-busqueda" value="{}">"#,
                        r#"<button type="submit">Buscar</button></form>"#,
                        r#"<div id="resultados-busqueda">{}</div>"#,
                    ),
                    escape(&form.nombre),
                    escape(&form.apellido),
                    escape(&form.fecha_nacimiento),
                    escape(&form.telefono),
                    escape(&self.search_input),
                    self.search_results
                )
            }
            Section::Booking => {
                let form = &self.booking_form;
                format!(
                    concat!(
                        r#"<form id="form-agendar">"#,
                        r#"<select id="select-paciente">{}</select>"#,
                        r#"<select id="select-medico">{}</select>"#,
                        r#"<input id="fecha_hora" type="datetime-local" value="{}">"#,
                        r#"<textarea id="motivo">{}</textarea>"#,
                        r#"<button type="submit">Agendar</button></form>"#,
                    ),
                    views::select_options("Seleccione un paciente", &self.patient_options, &form.id_paciente),
                    views::select_options("Seleccione un médico", &self.doctor_options, &form.id_medico),
                    escape(&form.fecha_hora),
                    escape(&form.motivo)
                )
            }
        }
    }

    pub fn render_page(&self) -> String {
        let buttons: String = self
            .nav
            .iter()
            .map(|entry| {
                format!(
                    r#"<button id="{}" class="{}">{}</button>"#,
                    entry.section.button_id(),
                    if entry.button_active { "nav-btn active" } else { "nav-btn" },
                    entry.section.title()
                )
            })
            .collect();
        let sections: String = Section::ALL
            .iter()
            .map(|&section| self.render_section(section))
            .collect();
        format!(
            "<!DOCTYPE html>\n<html lang=\"es\"><head><meta charset=\"utf-8\"><title>Registro de Pacientes</title></head><body><nav>{}</nav><main>{}</main></body></html>\n",
            buttons, sections
        )
    }
}
