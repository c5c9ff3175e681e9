use chrono::NaiveDate;
use leptos::*;

use super::{
    forms::{AttendanceEdit, AttendanceForm, EmployeeField, EmployeeForm, FilterField, FilterState},
    messages::{Flash, MessageKind, MessageTimers},
};
use crate::{
    api::{AttendanceRecord, Employee, EmployeeAttendanceSummary, StatsSummary, TodayStats},
    utils::time,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Employees,
    Attendance,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Employees, Tab::Attendance];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Employees => "Employees",
            Tab::Attendance => "Attendance",
        }
    }
}

/// One independently loaded slice of server data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Employees,
    Attendance,
    Stats,
    TodayStats,
    EmployeeSummary,
}

impl Resource {
    const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize
    }

    /// Only the two list loads drive the loading indicator.
    pub fn tracks_loading(self) -> bool {
        matches!(self, Resource::Employees | Resource::Attendance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    pub resource: Resource,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RequestLedger {
    latest: [u64; Resource::COUNT],
    in_flight: usize,
}

impl RequestLedger {
    fn start(&mut self, resource: Resource) {
        self.latest[resource.index()] += 1;
        if resource.tracks_loading() {
            self.in_flight += 1;
        }
    }

    fn latest(&self, resource: Resource) -> RequestToken {
        RequestToken {
            resource,
            seq: self.latest[resource.index()],
        }
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.seq != 0 && self.latest[token.resource.index()] == token.seq
    }

    /// Marks the request done and reports whether its result should be kept.
    fn finish(&mut self, token: RequestToken) -> bool {
        if token.resource.tracks_loading() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.is_current(token)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    TabSelected(Tab),
    RequestStarted(Resource),
    EmployeesLoaded(RequestToken, Vec<Employee>),
    AttendanceLoaded(RequestToken, Vec<AttendanceRecord>),
    StatsLoaded(RequestToken, StatsSummary),
    TodayStatsLoaded(RequestToken, TodayStats),
    EmployeeSummaryLoaded(RequestToken, EmployeeAttendanceSummary),
    EmployeeSummaryCleared,
    RequestFailed(RequestToken),
    MutationStarted,
    MutationFinished,
    EmployeeFormEdited(EmployeeField, String),
    EmployeeFormReset,
    AttendanceFormEdited(AttendanceEdit),
    AttendanceFormReset(NaiveDate),
    FilterEdited(FilterField, String),
    FiltersCleared,
    MessageShown {
        kind: MessageKind,
        text: String,
        origin: Option<Resource>,
    },
    MessageExpired(MessageKind, u64),
}

/// Everything the page renders. Changed only through [`HrState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct HrState {
    pub active_tab: Tab,
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub stats: Option<StatsSummary>,
    pub today_stats: Option<TodayStats>,
    pub employee_summary: Option<EmployeeAttendanceSummary>,
    pub employee_form: EmployeeForm,
    pub attendance_form: AttendanceForm,
    pub filters: FilterState,
    pub error_message: Option<Flash>,
    pub success_message: Option<Flash>,
    error_origin: Option<Resource>,
    ledger: RequestLedger,
    last_message_id: u64,
}

impl Default for HrState {
    fn default() -> Self {
        Self::new(time::today())
    }
}

impl HrState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: Tab::default(),
            employees: Vec::new(),
            attendance: Vec::new(),
            stats: None,
            today_stats: None,
            employee_summary: None,
            employee_form: EmployeeForm::default(),
            attendance_form: AttendanceForm::new(today),
            filters: FilterState::default(),
            error_message: None,
            success_message: None,
            error_origin: None,
            ledger: RequestLedger::default(),
            last_message_id: 0,
        }
    }

    pub fn loading(&self) -> bool {
        self.ledger.in_flight > 0
    }

    pub fn latest_token(&self, resource: Resource) -> RequestToken {
        self.ledger.latest(resource)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.ledger.is_current(token)
    }

    pub fn message(&self, kind: MessageKind) -> Option<&Flash> {
        match kind {
            MessageKind::Success => self.success_message.as_ref(),
            MessageKind::Error => self.error_message.as_ref(),
        }
    }

    pub fn apply(mut self, event: StoreEvent) -> Self {
        self.reduce(event);
        self
    }

    pub(crate) fn reduce(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::TabSelected(tab) => self.active_tab = tab,
            StoreEvent::RequestStarted(resource) => self.ledger.start(resource),
            StoreEvent::EmployeesLoaded(token, employees) => {
                if self.ledger.finish(token) {
                    self.employees = employees;
                    self.clear_load_error(token.resource);
                }
            }
            StoreEvent::AttendanceLoaded(token, records) => {
                if self.ledger.finish(token) {
                    self.attendance = records;
                    self.clear_load_error(token.resource);
                }
            }
            StoreEvent::StatsLoaded(token, stats) => {
                if self.ledger.finish(token) {
                    self.stats = Some(stats);
                }
            }
            StoreEvent::TodayStatsLoaded(token, stats) => {
                if self.ledger.finish(token) {
                    self.today_stats = Some(stats);
                }
            }
            StoreEvent::EmployeeSummaryLoaded(token, summary) => {
                if self.ledger.finish(token) {
                    self.employee_summary = Some(summary);
                }
            }
            StoreEvent::EmployeeSummaryCleared => {
                // Invalidate any summary request still in flight.
                self.ledger.start(Resource::EmployeeSummary);
                self.employee_summary = None;
            }
            StoreEvent::RequestFailed(token) => {
                self.ledger.finish(token);
            }
            StoreEvent::MutationStarted => self.ledger.in_flight += 1,
            StoreEvent::MutationFinished => {
                self.ledger.in_flight = self.ledger.in_flight.saturating_sub(1)
            }
            StoreEvent::EmployeeFormEdited(field, value) => self.employee_form.set(field, value),
            StoreEvent::EmployeeFormReset => self.employee_form = EmployeeForm::default(),
            StoreEvent::AttendanceFormEdited(edit) => self.attendance_form.edit(edit),
            StoreEvent::AttendanceFormReset(today) => self.attendance_form.reset(today),
            StoreEvent::FilterEdited(field, value) => self.filters.set(field, value),
            StoreEvent::FiltersCleared => self.filters.clear(),
            StoreEvent::MessageShown { kind, text, origin } => {
                self.last_message_id += 1;
                let flash = Flash {
                    id: self.last_message_id,
                    kind,
                    text,
                };
                match kind {
                    MessageKind::Success => self.success_message = Some(flash),
                    MessageKind::Error => {
                        self.error_message = Some(flash);
                        self.error_origin = origin;
                    }
                }
            }
            StoreEvent::MessageExpired(kind, id) => {
                let slot = match kind {
                    MessageKind::Success => &mut self.success_message,
                    MessageKind::Error => &mut self.error_message,
                };
                if slot.as_ref().is_some_and(|flash| flash.id == id) {
                    *slot = None;
                }
            }
        }
    }

    // A good fetch only retracts the error its own earlier failure raised.
    fn clear_load_error(&mut self, resource: Resource) {
        if self.error_origin == Some(resource) {
            self.error_message = None;
            self.error_origin = None;
        }
    }
}

/// Shared handle to the page state. `Copy`, so handlers take it by value.
#[derive(Clone, Copy)]
pub struct HrStore {
    state: RwSignal<HrState>,
    timers: StoredValue<MessageTimers>,
}

impl HrStore {
    pub fn new() -> Self {
        Self::with_state(HrState::default())
    }

    pub fn with_state(state: HrState) -> Self {
        Self {
            state: create_rw_signal(state),
            timers: store_value(MessageTimers::default()),
        }
    }

    pub fn state(&self) -> ReadSignal<HrState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> HrState {
        self.state.get_untracked()
    }

    pub fn with<T>(&self, f: impl FnOnce(&HrState) -> T) -> T {
        self.state.with_untracked(f)
    }

    pub fn dispatch(&self, event: StoreEvent) {
        self.state.update(|state| state.reduce(event));
    }

    /// Starts a load of `resource` and returns the token its result must carry.
    pub fn begin(&self, resource: Resource) -> RequestToken {
        self.dispatch(StoreEvent::RequestStarted(resource));
        self.with(|state| state.latest_token(resource))
    }

    pub fn notify(&self, kind: MessageKind, text: impl Into<String>) {
        self.show(kind, text.into(), None);
    }

    /// Error raised by a failed list load; a later good load of the same list clears it.
    pub fn notify_load_error(&self, resource: Resource, text: impl Into<String>) {
        self.show(MessageKind::Error, text.into(), Some(resource));
    }

    fn show(&self, kind: MessageKind, text: String, origin: Option<Resource>) {
        self.dispatch(StoreEvent::MessageShown { kind, text, origin });
        let Some(id) = self.with(|state| state.message(kind).map(|flash| flash.id)) else {
            return;
        };
        let state = self.state;
        self.timers.update_value(|timers| {
            timers.schedule(kind, move || {
                state.update(|s| s.reduce(StoreEvent::MessageExpired(kind, id)));
            })
        });
    }
}

impl Default for HrStore {
    fn default() -> Self {
        Self::new()
    }
}
