//! FFI use-case API for the Flutter-facing screens.
//!
//! # Responsibility
//! - Expose stable, screen-level intents and read views to Dart via FRB.
//! - Own the process-global state behind each screen.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary; poisoned
//!   locks are recovered, not propagated.
//! - All mutations for a screen pass through that screen's lock, so state
//!   changes apply in one serialized order even when the UI host calls in
//!   from multiple threads.
//! - Screen reset re-initializes empty state; no state continues across
//!   navigation.

use log::debug;
use meditrack_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Medication, MedicationTracker, Notification, NotificationFeed, TimeOfDay, WaterEntry,
    WaterTracker, QUICK_ADD_AMOUNTS_ML,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static HOME_SCREEN: OnceLock<Mutex<HomeScreen>> = OnceLock::new();
static WATER_SCREEN: OnceLock<Mutex<WaterTracker>> = OnceLock::new();

/// State owned by the home dashboard screen.
struct HomeScreen {
    medications: MedicationTracker,
    notifications: NotificationFeed,
}

impl HomeScreen {
    fn fresh() -> Self {
        Self {
            medications: MedicationTracker::new(),
            notifications: NotificationFeed::seeded(),
        }
    }
}

fn home_screen() -> MutexGuard<'static, HomeScreen> {
    HOME_SCREEN
        .get_or_init(|| Mutex::new(HomeScreen::fresh()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn water_screen() -> MutexGuard<'static, WaterTracker> {
    WATER_SCREEN
        .get_or_init(|| Mutex::new(WaterTracker::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Medication card data for the home dashboard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationView {
    /// Stable medication ID in string form.
    pub id: String,
    pub name: String,
    pub dosage: String,
    /// Dose time as `HH:MM`.
    pub time: String,
    pub taken: bool,
}

/// Home dashboard read view: medication list plus header metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDashboardView {
    /// Today's medications in display order.
    pub medications: Vec<MedicationView>,
    /// Adherence ring percentage.
    pub adherence_percent: u8,
    /// Medications marked taken today.
    pub taken_count: u32,
    /// Medications tracked today.
    pub total_count: u32,
    /// Unread count for the bell badge.
    pub unread_notifications: u32,
}

/// Notification entry for the bell sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Relative display string ("2 min ago").
    pub time: String,
    pub read: bool,
}

/// Water log entry for the tracker history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterEntryView {
    pub amount_ml: u32,
    pub logged_at_ms: i64,
}

/// Water tracker read view: totals, progress and history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterDashboardView {
    pub total_ml: u32,
    pub goal_ml: u32,
    /// Goal progress, capped at 100.
    pub progress_percent: u8,
    /// Encouragement tier label (`starting|halfway|near-goal|complete`).
    pub tier_label: String,
    /// Shortfall rank, 0 (goal met) through 3 (just started).
    pub tier_severity: u8,
    /// Retained entries, newest first.
    pub entries: Vec<WaterEntryView>,
}

/// Generic action response envelope for screen intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenActionResponse {
    /// Whether the intent was applied.
    pub ok: bool,
    /// Optional affected entity ID.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ScreenActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// Re-initializes home screen state; called when the screen is entered.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Clears the medication list and reloads the stock notification feed.
#[flutter_rust_bridge::frb(sync)]
pub fn home_screen_reset() {
    *home_screen() = HomeScreen::fresh();
    debug!("event=home_screen_reset module=ffi status=ok");
}

/// Reads the home dashboard view: medication list plus header metrics.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Derived metrics are recomputed on every read.
#[flutter_rust_bridge::frb(sync)]
pub fn home_dashboard() -> HomeDashboardView {
    let screen = home_screen();
    let adherence = screen.medications.adherence();
    HomeDashboardView {
        medications: screen
            .medications
            .medications()
            .iter()
            .map(to_medication_view)
            .collect(),
        adherence_percent: adherence.percent,
        taken_count: adherence.taken,
        total_count: adherence.total,
        unread_notifications: screen.notifications.unread_count(),
    }
}

/// Adds a medication from the add-medication form.
///
/// Input semantics:
/// - `name` / `dosage`: trimmed; blank values are rejected.
/// - `time`: 24-hour `HH:MM` string from the time picker.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Rejections leave the list unchanged and return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn home_add_medication(name: String, dosage: String, time: String) -> ScreenActionResponse {
    let time = match TimeOfDay::parse(time.as_str()) {
        Ok(time) => time,
        Err(err) => {
            return ScreenActionResponse::failure(format!("home_add_medication failed: {err}"))
        }
    };

    let mut screen = home_screen();
    match screen
        .medications
        .add_medication(name.as_str(), dosage.as_str(), time)
    {
        Ok(medication) => {
            debug!(
                "event=medication_added module=ffi status=ok id={}",
                medication.id
            );
            ScreenActionResponse::success("Medication added.", Some(medication.id.to_string()))
        }
        Err(err) => ScreenActionResponse::failure(format!("home_add_medication failed: {err}")),
    }
}

/// Toggles the taken flag on one medication card.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown or malformed IDs are rejected with state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn home_toggle_medication(id: String) -> ScreenActionResponse {
    let medication_id = match Uuid::parse_str(id.as_str()) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ScreenActionResponse::failure(format!(
                "home_toggle_medication failed: medication not found: {id}"
            ))
        }
    };

    let mut screen = home_screen();
    match screen.medications.toggle_taken(medication_id) {
        Ok(medication) => {
            let message = if medication.taken {
                "Marked as taken."
            } else {
                "Marked as not taken."
            };
            ScreenActionResponse::success(message, Some(medication.id.to_string()))
        }
        Err(err) => ScreenActionResponse::failure(format!("home_toggle_medication failed: {err}")),
    }
}

/// Reads the notification feed for the bell sheet.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Read-only; the feed has no mutation intent in this scope.
#[flutter_rust_bridge::frb(sync)]
pub fn home_notifications() -> Vec<NotificationView> {
    home_screen()
        .notifications
        .notifications()
        .iter()
        .map(to_notification_view)
        .collect()
}

/// Re-initializes water screen state; called when the screen is entered.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Resets the total to zero and clears the history log.
#[flutter_rust_bridge::frb(sync)]
pub fn water_screen_reset() {
    *water_screen() = WaterTracker::default();
    debug!("event=water_screen_reset module=ffi status=ok");
}

/// Reads the water tracker view: totals, progress, tier and history.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Derived metrics are recomputed on every read.
#[flutter_rust_bridge::frb(sync)]
pub fn water_dashboard() -> WaterDashboardView {
    let tracker = water_screen();
    let tier = tracker.status_tier();
    WaterDashboardView {
        total_ml: tracker.total_ml(),
        goal_ml: tracker.goal_ml(),
        progress_percent: tracker.progress_percent(),
        tier_label: tier.label().to_owned(),
        tier_severity: tier.severity(),
        entries: tracker.entries().iter().map(to_water_entry_view).collect(),
    }
}

/// Records one water addition from a quick-add button.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Non-positive amounts are rejected with state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn water_add(amount_ml: i64) -> ScreenActionResponse {
    let mut tracker = water_screen();
    match tracker.add_water(amount_ml, now_epoch_ms()) {
        Ok(entry) => {
            debug!(
                "event=water_added module=ffi status=ok amount_ml={}",
                entry.amount_ml
            );
            ScreenActionResponse::success(format!("Added {}ml.", entry.amount_ml), None)
        }
        Err(err) => ScreenActionResponse::failure(format!("water_add failed: {err}")),
    }
}

/// Removes the most recent water entry and refunds its amount.
///
/// # FFI contract
/// - Sync call, never panics.
/// - An empty history is rejected with state unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn water_undo_last() -> ScreenActionResponse {
    let mut tracker = water_screen();
    match tracker.undo_last() {
        Ok(entry) => {
            ScreenActionResponse::success(format!("Removed {}ml.", entry.amount_ml), None)
        }
        Err(err) => ScreenActionResponse::failure(format!("water_undo_last failed: {err}")),
    }
}

/// Quick-add button amounts rendered by the water screen.
///
/// # FFI contract
/// - Sync call, never panics, constant result.
#[flutter_rust_bridge::frb(sync)]
pub fn water_quick_add_amounts() -> Vec<u32> {
    QUICK_ADD_AMOUNTS_ML.to_vec()
}

fn to_medication_view(medication: &Medication) -> MedicationView {
    MedicationView {
        id: medication.id.to_string(),
        name: medication.name.clone(),
        dosage: medication.dosage.clone(),
        time: medication.time.to_string(),
        taken: medication.taken,
    }
}

fn to_notification_view(notification: &Notification) -> NotificationView {
    NotificationView {
        id: notification.id.to_string(),
        title: notification.title.clone(),
        message: notification.message.clone(),
        time: notification.time.clone(),
        read: notification.read,
    }
}

fn to_water_entry_view(entry: &WaterEntry) -> WaterEntryView {
    WaterEntryView {
        amount_ml: entry.amount_ml,
        logged_at_ms: entry.logged_at_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, home_add_medication, home_dashboard, home_notifications, home_screen_reset,
        home_toggle_medication, init_logging, ping, water_add, water_dashboard,
        water_quick_add_amounts, water_screen_reset, water_undo_last,
    };
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // Screen state is process-global, so tests that touch it serialize on
    // one lock.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn home_add_and_toggle_roundtrip() {
        let _guard = serial();
        home_screen_reset();

        let added = home_add_medication(
            "Ibuprofen".to_string(),
            "200mg".to_string(),
            "08:00".to_string(),
        );
        assert!(added.ok, "{}", added.message);
        let id = added.id.expect("add should return the medication id");

        let dashboard = home_dashboard();
        assert_eq!(dashboard.total_count, 1);
        assert_eq!(dashboard.taken_count, 0);
        assert_eq!(dashboard.adherence_percent, 0);
        assert_eq!(dashboard.medications[0].time, "08:00");

        let toggled = home_toggle_medication(id.clone());
        assert!(toggled.ok, "{}", toggled.message);
        assert_eq!(home_dashboard().adherence_percent, 100);

        let toggled_back = home_toggle_medication(id);
        assert!(toggled_back.ok, "{}", toggled_back.message);
        assert_eq!(home_dashboard().adherence_percent, 0);
    }

    #[test]
    fn home_add_rejects_blank_name_and_keeps_list() {
        let _guard = serial();
        home_screen_reset();

        let rejected = home_add_medication(
            "   ".to_string(),
            "200mg".to_string(),
            "08:00".to_string(),
        );
        assert!(!rejected.ok);
        assert_eq!(home_dashboard().total_count, 0);
    }

    #[test]
    fn home_add_rejects_malformed_time() {
        let _guard = serial();
        home_screen_reset();

        let rejected = home_add_medication(
            "Ibuprofen".to_string(),
            "200mg".to_string(),
            "noon".to_string(),
        );
        assert!(!rejected.ok);
        assert_eq!(home_dashboard().total_count, 0);
    }

    #[test]
    fn home_toggle_rejects_unknown_and_malformed_ids() {
        let _guard = serial();
        home_screen_reset();

        let unknown =
            home_toggle_medication("11111111-2222-4333-8444-555555555555".to_string());
        assert!(!unknown.ok);

        let malformed = home_toggle_medication("not-a-uuid".to_string());
        assert!(!malformed.ok);
    }

    #[test]
    fn home_reset_restores_stock_notifications() {
        let _guard = serial();
        home_screen_reset();

        let notifications = home_notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].title, "Medication Reminder");
        assert!(!notifications[0].read);
        assert_eq!(home_dashboard().unread_notifications, 1);
    }

    #[test]
    fn water_add_and_undo_roundtrip() {
        let _guard = serial();
        water_screen_reset();

        assert!(water_add(100).ok);
        assert!(water_add(200).ok);
        let view = water_dashboard();
        assert_eq!(view.total_ml, 300);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].amount_ml, 200);

        let undone = water_undo_last();
        assert!(undone.ok, "{}", undone.message);
        let view = water_dashboard();
        assert_eq!(view.total_ml, 100);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].amount_ml, 100);
    }

    #[test]
    fn water_add_rejects_non_positive_amount() {
        let _guard = serial();
        water_screen_reset();

        let rejected = water_add(-5);
        assert!(!rejected.ok);
        let view = water_dashboard();
        assert_eq!(view.total_ml, 0);
        assert!(view.entries.is_empty());
    }

    #[test]
    fn water_undo_on_empty_log_is_rejected() {
        let _guard = serial();
        water_screen_reset();

        let rejected = water_undo_last();
        assert!(!rejected.ok);
        assert_eq!(water_dashboard().total_ml, 0);
    }

    #[test]
    fn water_dashboard_reports_tier() {
        let _guard = serial();
        water_screen_reset();

        assert!(water_add(1300).ok);
        let view = water_dashboard();
        assert_eq!(view.progress_percent, 52);
        assert_eq!(view.tier_label, "halfway");
        assert_eq!(view.tier_severity, 2);
    }

    #[test]
    fn quick_add_amounts_match_screen_buttons() {
        assert_eq!(water_quick_add_amounts(), vec![100, 200, 300, 400, 500]);
    }
}
