//! Constants used throughout the application
//!
//! User-facing text is Spanish, matching the BuscadorDoc server.

use std::time::Duration;

// Status line
pub const STATUS_UPLOAD_PROMPT: &str = "Sube un archivo para buscar en tus datos.";
pub const STATUS_CONNECTION_ERROR: &str = "Error al conectar con el servidor.";

// Alerts
pub const ALERT_UPLOAD_PREFIX: &str = "Error al subir el archivo";
pub const ALERT_CLEAR_FAILED: &str = "Error al limpiar los datos.";

// Search banner
pub const BANNER_NO_RESULTS: &str = "No se encontraron resultados.";
pub const BANNER_SEARCH_ERROR_PREFIX: &str = "Error en la búsqueda";
pub const BANNER_SEARCH_CONNECTION: &str = "no se pudo conectar con el servidor";

// Cards
pub const CARD_TITLE_FALLBACK: &str = "Documento";
pub const CARD_LABEL_BACK_1: &str = "Detalle:";
pub const CARD_LABEL_BACK_2: &str = "Referencia:";
pub const CARD_LABEL_BACK_3: &str = "Estado:";
/// Layout slots used when no schema is declared: front then back.
pub const CARD_DEFAULT_SLOTS: [usize; 6] = [0, 1, 4, 2, 6, 8];

// Tabs
pub const TAB_INTERNAL: &str = "Base interna";
pub const TAB_EXCEL: &str = "Mis datos (Excel)";

// Welcome curtain
pub const WELCOME_TITLE: &str = "BuscadorDoc";
pub const GREETING_DEFAULT: &str =
    "Que tengas un grandioso día, suerte para encontrar los EEM que tal vez se quedaron en tu caja. Trabaja!";
pub const GREETING_AFTERNOON: &str =
    "Despues del refrigerio espero que ahora si trabajes, y encuentres lo que buscas. Suerte!";
pub const GREETING_EVENING: &str =
    "Ya es hora de que alistes tus cosas para regresar a casa, porque a la última hora. Suerte con la búsqueda!";
/// Greeting band thresholds (local hour, inclusive lower bounds)
pub const EVENING_FROM_HOUR: u32 = 18;
pub const AFTERNOON_FROM_HOUR: u32 = 13;
/// How long the curtain stays up before it starts to leave
pub const WELCOME_CURTAIN_DURATION: Duration = Duration::from_secs(10);
/// Frames in the curtain's dismissal transition
pub const CURTAIN_DISMISS_FRAMES: u16 = 12;

// Dialogs
pub const DIALOG_TITLE_UPLOAD: &str = "Subir archivo (.xlsx, .xls, .csv)";
pub const DIALOG_TITLE_LOGS: &str = "Registros - Esc para cerrar";
pub const CONFIG_GENERATED: &str = "Archivo de configuración generado";

// Config bounds
pub const TIMEOUT_MIN_SECS: u64 = 1;
pub const TIMEOUT_MAX_SECS: u64 = 300;
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Event loop
pub const TICK_RATE: Duration = Duration::from_millis(50);
