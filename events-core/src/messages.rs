//! User-visible notification texts.

use veterinaria_events_types::NotificationRequest;

/// Pet name used when a reminder does not carry one.
pub const DEFAULT_PET_NAME: &str = "Mascota";

/// Appointment time used when a reminder does not carry one.
pub const DEFAULT_APPOINTMENT_TIME: &str = "Pronto";

/// Title of the appointment reminder.
pub const REMINDER_TITLE: &str = "Recordatorio de Cita";

const OFFLINE_BODY: &str = "Trabajando en modo offline";

/// Shown after boot once services are started.
pub fn boot_completed() -> NotificationRequest {
    NotificationRequest::new(
        "Veterinaria iniciada",
        "Los servicios de la aplicación están activos",
    )
}

/// Shown when the network comes back.
pub fn connectivity_restored() -> NotificationRequest {
    NotificationRequest::new("Conexión restaurada", "Sincronizando datos de la veterinaria")
}

/// Shown when the network is gone.
pub fn connectivity_lost() -> NotificationRequest {
    NotificationRequest::new("Sin conexión", OFFLINE_BODY)
}

/// Shown when the battery runs low.
pub fn battery_low() -> NotificationRequest {
    NotificationRequest::new("Batería baja", "Servicios pausados para ahorrar energía")
}

/// Shown when a charger is plugged in.
pub fn power_connected() -> NotificationRequest {
    NotificationRequest::new("Dispositivo en carga", "Optimizando datos de la veterinaria")
}

/// Shown when airplane mode is switched on.
pub fn airplane_mode_on() -> NotificationRequest {
    NotificationRequest::new("Modo avión activado", OFFLINE_BODY)
}

/// Appointment reminder, with defaults for missing fields.
pub fn appointment_reminder(
    pet_name: Option<&str>,
    appointment_time: Option<&str>,
) -> NotificationRequest {
    let pet = pet_name.unwrap_or(DEFAULT_PET_NAME);
    let time = appointment_time.unwrap_or(DEFAULT_APPOINTMENT_TIME);
    NotificationRequest::new(REMINDER_TITLE, format!("Cita de {pet} a las {time}"))
}
