//! Action strings and extra keys exchanged with the host.

/// Device finished booting.
pub const BOOT_COMPLETED: &str = "android.intent.action.BOOT_COMPLETED";

/// Connectivity changed. The platform delivers this string under both
/// `CONNECTIVITY_ACTION` and its literal form.
pub const CONNECTIVITY_CHANGE: &str = "android.net.conn.CONNECTIVITY_CHANGE";

/// Alias accepted for [`CONNECTIVITY_CHANGE`]. Not a platform action; hosts
/// that name the tag after the `CONNECTIVITY_ACTION` constant may send it.
/// Events always report the canonical [`CONNECTIVITY_CHANGE`] tag.
pub const CONNECTIVITY_ACTION: &str = "android.net.conn.CONNECTIVITY_ACTION";

/// Battery dropped below the low threshold.
pub const BATTERY_LOW: &str = "android.intent.action.BATTERY_LOW";

/// Battery recovered from low.
pub const BATTERY_OKAY: &str = "android.intent.action.BATTERY_OKAY";

/// External power connected.
pub const POWER_CONNECTED: &str = "android.intent.action.ACTION_POWER_CONNECTED";

/// External power disconnected.
pub const POWER_DISCONNECTED: &str = "android.intent.action.ACTION_POWER_DISCONNECTED";

/// Airplane mode toggled. Carries [`EXTRA_STATE`].
pub const AIRPLANE_MODE_CHANGED: &str = "android.intent.action.AIRPLANE_MODE";

/// Application-private appointment reminder. Carries [`EXTRA_PET_NAME`] and [`EXTRA_APPOINTMENT_TIME`].
pub const APPOINTMENT_REMINDER: &str = "com.example.veterinaria.RECORDATORIO_CITA";

/// Application-private manual sync request.
pub const MANUAL_SYNC: &str = "com.example.veterinaria.SINCRONIZAR_DATOS";

/// Boolean extra on [`AIRPLANE_MODE_CHANGED`].
pub const EXTRA_STATE: &str = "state";

/// Optional text extra on [`APPOINTMENT_REMINDER`].
pub const EXTRA_PET_NAME: &str = "NOMBRE_MASCOTA";

/// Optional text extra on [`APPOINTMENT_REMINDER`].
pub const EXTRA_APPOINTMENT_TIME: &str = "HORA_CITA";

/// Job command that starts synchronization.
pub const ACTION_START_SYNC: &str = "ACTION_INICIAR_SYNC";

/// Job command that stops synchronization.
pub const ACTION_STOP_SYNC: &str = "ACTION_DETENER_SYNC";
