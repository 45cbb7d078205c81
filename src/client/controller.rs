use crate::{
    appointments::requests::BookAppointmentRequest,
    patients::requests::RegisterPatientRequest,
};

use super::{
    api::ClinicApi,
    document::{BookingForm, Document, RegisterForm, Section},
    views,
};

pub const REGISTER_SUCCESS: &str = "Paciente registrado con éxito!";
pub const REGISTER_FAILURE: &str = "Error al registrar el paciente.";
pub const BOOK_SUCCESS: &str = "Cita agendada con éxito!";
pub const BOOK_FAILURE: &str = "Error al agendar la cita.";
pub const BOOK_MISSING_FIELDS: &str = "Por favor, complete todos los campos obligatorios.";

/// Owns the page and the API handle. Each operation is one user action: it
/// awaits its single round trip and then renders the answer.
pub struct ViewController<A> {
    api: A,
    document: Document,
}

impl<A: ClinicApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            document: Document::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Initial data load of the page.
    pub async fn start(&mut self) {
        self.load_patient_options().await;
        self.load_doctor_options().await;
    }

    pub async fn navigate(&mut self, section: Section) {
        self.document.activate(section);
        if section == Section::Appointments {
            self.load_appointments().await;
        }
    }

    /// Same as clicking the nav button with the given id.
    pub async fn click_nav(&mut self, button_id: &str) {
        match Section::from_button_id(button_id) {
            Some(section) => self.navigate(section).await,
            None => log::warn!("Unknown nav button '{}'", button_id),
        }
    }

    pub async fn load_appointments(&mut self) {
        match self.api.list_appointments().await {
            Ok(appos) => self.document.appointments_body = views::appointment_rows(&appos),
            Err(err) => log::error!("Error al cargar las citas: {:#}", err),
        }
    }

    pub async fn load_patient_options(&mut self) {
        match self.api.list_patients().await {
            Ok(patients) => self.document.patient_options = views::patient_options(&patients),
            Err(err) => log::error!("Error al cargar los pacientes: {:#}", err),
        }
    }

    pub async fn load_doctor_options(&mut self) {
        match self.api.list_doctors().await {
            Ok(doctors) => self.document.doctor_options = views::doctor_options(&doctors),
            Err(err) => log::error!("Error al cargar los médicos: {:#}", err),
        }
    }

    pub async fn register_patient(&mut self) {
        let form = &self.document.register_form;
        let info = RegisterPatientRequest {
            nombre: Some(form.nombre.clone().into()),
            apellido: Some(form.apellido.clone().into()),
            fecha_nacimiento: Some(form.fecha_nacimiento.clone().into()),
            telefono: Some(form.telefono.clone().into()),
        };

        match self.api.register_patient(&info).await {
            Ok(res) => {
                log::info!("Patient {} registered", res.insert_id);
                self.document.alert(REGISTER_SUCCESS);
                self.document.register_form = RegisterForm::default();
                self.load_patient_options().await;
            }
            Err(err) => {
                log::error!("Error de conexión: {:#}", err);
                self.document.alert(REGISTER_FAILURE);
            }
        }
    }

    /// An empty term sends nothing.
    pub async fn search_patients(&mut self) {
        let term = self.document.search_input.clone();
        if term.is_empty() {
            return;
        }

        match self.api.search_patients(&term).await {
            Ok(records) => self.document.search_results = views::patient_cards(&records),
            Err(err) => log::error!("Error al buscar: {:#}", err),
        }
    }

    pub async fn book_appointment(&mut self) {
        let form = self.document.booking_form.clone();
        if [&form.id_paciente, &form.id_medico, &form.fecha_hora]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            self.document.alert(BOOK_MISSING_FIELDS);
            return;
        }

        let info = BookAppointmentRequest {
            id_paciente: Some(form.id_paciente.into()),
            id_medico: Some(form.id_medico.into()),
            fecha_hora: Some(form.fecha_hora.into()),
            motivo: Some(form.motivo.into()),
        };

        match self.api.book_appointment(&info).await {
            Ok(res) => {
                log::info!("Appointment {} booked", res.insert_id);
                self.document.alert(BOOK_SUCCESS);
                self.document.booking_form = BookingForm::default();
            }
            Err(err) => {
                log::error!("Error de conexión: {:#}", err);
                self.document.alert(BOOK_FAILURE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        appointments::responses::AppointmentItem,
        doctors::responses::DoctorItem,
        patients::responses::{PatientItem, PatientRecord},
        protocol::{FieldValue, InsertResponse},
    };
    use anyhow::bail;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeApi {
        fail: Cell<bool>,
        calls: RefCell<Vec<&'static str>>,
        appointments: RefCell<Vec<AppointmentItem>>,
        patients: RefCell<Vec<PatientItem>>,
        doctors: RefCell<Vec<DoctorItem>>,
        records: RefCell<Vec<PatientRecord>>,
        registered: RefCell<Vec<RegisterPatientRequest>>,
        booked: RefCell<Vec<BookAppointmentRequest>>,
    }

    impl FakeApi {
        fn record(&self, call: &'static str) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(call);
            if self.fail.get() {
                bail!("connection refused");
            }
            Ok(())
        }

        fn count(&self, call: &str) -> usize {
            self.calls.borrow().iter().filter(|c| **c == call).count()
        }
    }

    #[async_trait(?Send)]
    impl ClinicApi for FakeApi {
        async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentItem>> {
            self.record("list_appointments")?;
            Ok(self.appointments.borrow().clone())
        }

        async fn list_patients(&self) -> anyhow::Result<Vec<PatientItem>> {
            self.record("list_patients")?;
            Ok(self.patients.borrow().clone())
        }

        async fn list_doctors(&self) -> anyhow::Result<Vec<DoctorItem>> {
            self.record("list_doctors")?;
            Ok(self.doctors.borrow().clone())
        }

        async fn register_patient(
            &self,
            info: &RegisterPatientRequest,
        ) -> anyhow::Result<InsertResponse> {
            self.record("register_patient")?;
            self.registered.borrow_mut().push(info.clone());
            let id = self.registered.borrow().len() as u64;
            Ok(InsertResponse::new("Paciente registrado con éxito.", id))
        }

        async fn search_patients(&self, _term: &str) -> anyhow::Result<Vec<PatientRecord>> {
            self.record("search_patients")?;
            Ok(self.records.borrow().clone())
        }

        async fn book_appointment(
            &self,
            info: &BookAppointmentRequest,
        ) -> anyhow::Result<InsertResponse> {
            self.record("book_appointment")?;
            self.booked.borrow_mut().push(info.clone());
            Ok(InsertResponse::new("Cita agendada con éxito.", 1))
        }
    }

    fn ana() -> PatientItem {
        PatientItem {
            id_paciente: 1,
            nombre: "Ana".to_string(),
            apellido: "Lopez".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            telefono: "555-1111".to_string(),
        }
    }

    fn filled_booking() -> BookingForm {
        BookingForm {
            id_paciente: "1".to_string(),
            id_medico: "2".to_string(),
            fecha_hora: "2024-05-01T10:30".to_string(),
            motivo: "control".to_string(),
        }
    }

    fn filled_registration() -> RegisterForm {
        RegisterForm {
            nombre: "Ana".to_string(),
            apellido: "Lopez".to_string(),
            fecha_nacimiento: "1990-01-01".to_string(),
            telefono: "555-1111".to_string(),
        }
    }

    #[actix_rt::test]
    async fn start_loads_both_selects() {
        let api = FakeApi::default();
        api.patients.borrow_mut().push(ana());
        api.doctors.borrow_mut().push(DoctorItem {
            id_medico: 2,
            nombre: "Juan".to_string(),
            apellido: "Perez".to_string(),
            nombre_especialidad: "Pediatría".to_string(),
        });
        let mut controller = ViewController::new(api);
        controller.start().await;

        let doc = controller.document();
        assert_eq!(doc.patient_options[0].label, "Ana Lopez");
        assert_eq!(doc.doctor_options[0].label, "Juan Perez - Pediatría");
    }

    #[actix_rt::test]
    async fn only_the_appointments_tab_reloads() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.navigate(Section::Patients).await;
        controller.navigate(Section::Booking).await;
        assert_eq!(controller.api().count("list_appointments"), 0);

        controller.click_nav("btn-citas").await;
        assert_eq!(controller.api().count("list_appointments"), 1);
        assert_eq!(controller.document().active_sections(), vec![Section::Appointments]);
        assert!(controller
            .document()
            .appointments_body
            .contains(views::NO_APPOINTMENTS_ROW));
    }

    #[actix_rt::test]
    async fn failed_list_load_keeps_page_and_raises_no_alert() {
        let api = FakeApi::default();
        api.fail.set(true);
        let mut controller = ViewController::new(api);
        controller.document_mut().appointments_body = "<tr><td>old</td></tr>".to_string();
        controller.navigate(Section::Appointments).await;

        assert_eq!(controller.document().appointments_body, "<tr><td>old</td></tr>");
        assert!(controller.document().alerts().is_empty());
    }

    #[actix_rt::test]
    async fn successful_registration_resets_form_and_refreshes_patients_only() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.document_mut().register_form = filled_registration();
        controller.register_patient().await;

        let api = controller.api();
        assert_eq!(api.registered.borrow().len(), 1);
        assert_eq!(
            api.registered.borrow()[0].fecha_nacimiento,
            Some(FieldValue::from("1990-01-01"))
        );
        assert_eq!(api.count("list_patients"), 1);
        assert_eq!(api.count("list_doctors"), 0);
        assert_eq!(controller.document().register_form, RegisterForm::default());
        assert_eq!(controller.document().alerts(), &[REGISTER_SUCCESS.to_string()]);
    }

    #[actix_rt::test]
    async fn failed_registration_alerts_and_keeps_input() {
        let api = FakeApi::default();
        api.fail.set(true);
        let mut controller = ViewController::new(api);
        controller.document_mut().register_form = filled_registration();
        controller.register_patient().await;

        assert_eq!(controller.document().register_form, filled_registration());
        assert_eq!(controller.document().alerts(), &[REGISTER_FAILURE.to_string()]);
        assert_eq!(controller.api().count("list_patients"), 0);
    }

    #[actix_rt::test]
    async fn empty_search_term_sends_nothing() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.search_patients().await;
        assert!(controller.api().calls.borrow().is_empty());
    }

    #[actix_rt::test]
    async fn search_renders_cards() {
        let api = FakeApi::default();
        api.records.borrow_mut().push(PatientRecord::new(ana()));
        let mut controller = ViewController::new(api);
        controller.document_mut().search_input = "Lop".to_string();
        controller.search_patients().await;

        let results = &controller.document().search_results;
        assert!(results.contains("<h3>Ana Lopez</h3>"));
        assert!(results.contains(views::PATIENT_WITHOUT_APPOINTMENTS));
    }

    #[actix_rt::test]
    async fn search_without_matches_says_so() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.document_mut().search_input = "Zz".to_string();
        controller.search_patients().await;
        assert!(controller
            .document()
            .search_results
            .contains(views::NO_PATIENTS_FOUND));
    }

    #[actix_rt::test]
    async fn booking_without_doctor_never_reaches_the_network() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.document_mut().booking_form = BookingForm {
            id_medico: String::new(),
            ..filled_booking()
        };
        controller.book_appointment().await;

        assert!(controller.api().calls.borrow().is_empty());
        assert_eq!(controller.document().alerts(), &[BOOK_MISSING_FIELDS.to_string()]);
        assert_eq!(controller.document().booking_form.id_paciente, "1");
    }

    #[actix_rt::test]
    async fn booking_without_patient_or_time_is_blocked() {
        for form in vec![
            BookingForm {
                id_paciente: String::new(),
                ..filled_booking()
            },
            BookingForm {
                fecha_hora: "  ".to_string(),
                ..filled_booking()
            },
        ] {
            let mut controller = ViewController::new(FakeApi::default());
            controller.document_mut().booking_form = form;
            controller.book_appointment().await;
            assert_eq!(controller.api().count("book_appointment"), 0);
        }
    }

    #[actix_rt::test]
    async fn booking_without_reason_is_sent() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.document_mut().booking_form = BookingForm {
            motivo: String::new(),
            ..filled_booking()
        };
        controller.book_appointment().await;
        assert_eq!(controller.api().count("book_appointment"), 1);
    }

    #[actix_rt::test]
    async fn successful_booking_sends_select_values_and_resets() {
        let mut controller = ViewController::new(FakeApi::default());
        controller.document_mut().booking_form = filled_booking();
        controller.book_appointment().await;

        let booked = controller.api().booked.borrow()[0].clone();
        assert_eq!(booked.id_paciente, Some(FieldValue::from("1")));
        assert_eq!(booked.id_medico, Some(FieldValue::from("2")));
        assert_eq!(booked.fecha_hora, Some(FieldValue::from("2024-05-01T10:30")));
        assert_eq!(controller.document().booking_form, BookingForm::default());
        assert_eq!(controller.document().alerts(), &[BOOK_SUCCESS.to_string()]);
    }

    #[actix_rt::test]
    async fn failed_booking_alerts_and_keeps_input() {
        let api = FakeApi::default();
        api.fail.set(true);
        let mut controller = ViewController::new(api);
        controller.document_mut().booking_form = filled_booking();
        controller.book_appointment().await;

        assert_eq!(controller.document().booking_form, filled_booking());
        assert_eq!(controller.document().alerts(), &[BOOK_FAILURE.to_string()]);
    }

    #[actix_rt::test]
    async fn resubmitting_registration_sends_twice() {
        let mut controller = ViewController::new(FakeApi::default());
        for _ in 0..2 {
            controller.document_mut().register_form = filled_registration();
            controller.register_patient().await;
        }
        assert_eq!(controller.api().count("register_patient"), 2);
    }
}
