//! Состояние мастера сопоставления изображений.
//!
//! Все переходы проходят через `MappingWizard::dispatch`; сетевой вызов
//! возвращается как `MappingCommand`, результат приходит обратно событием
//! `SubmissionFinished`. Поэтому логика проверяется без DOM и без сети.

use chrono::{DateTime, Utc};
use contracts::usecases::u601_apply_mapping::{
    collect_mappings, expand_assignments, ApplyMappingOutcome, ApplyMappingRequest, CollectError,
    UnmappedProduct,
};
use uuid::Uuid;

/// Сессия сопоставления: живёт пока открыт шаг Mapping
#[derive(Debug, Clone, PartialEq)]
pub struct MappingSession {
    pub id: Uuid,
    products: Vec<UnmappedProduct>,
    pub opened_at: DateTime<Utc>,
}

impl MappingSession {
    pub fn open(products: Vec<UnmappedProduct>) -> Self {
        Self {
            id: Uuid::new_v4(),
            products,
            opened_at: Utc::now(),
        }
    }

    pub fn products(&self) -> &[UnmappedProduct] {
        &self.products
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    /// Шаг 1: отчёт о строках без изображений
    Reconcile,
    /// Шаг 2: ввод имён файлов
    Mapping,
    /// Шаг 3: backend подтвердил пакет
    Confirmed { mapped_count: u64 },
}

/// Сообщение оператору на шаге Mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(CollectError),
    NothingToMap,
    /// Текст ошибки backend без изменений
    Rejected(String),
    /// Подробности только в логе
    Transport,
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Invalid(err) => err.to_string(),
            Notice::NothingToMap => "Nothing to map: every product already has an image".to_string(),
            Notice::Rejected(message) => message.clone(),
            Notice::Transport => "Could not reach the server. Please try again.".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Notice::NothingToMap)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MappingEvent {
    StartMapping,
    RowAdded,
    RowChanged { index: usize, filename: String },
    RowRemoved { index: usize },
    SubmitClicked,
    SubmissionFinished(ApplyMappingOutcome),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MappingCommand {
    Submit {
        session_id: Uuid,
        request: ApplyMappingRequest,
    },
}

#[derive(Debug, Clone)]
pub struct MappingWizard {
    unmapped: Vec<UnmappedProduct>,
    step: WorkflowStep,
    session: Option<MappingSession>,
    rows: Vec<String>,
    in_flight: bool,
    notice: Option<Notice>,
}

impl MappingWizard {
    pub fn new(unmapped: Vec<UnmappedProduct>) -> Self {
        Self {
            unmapped,
            step: WorkflowStep::Reconcile,
            session: None,
            rows: Vec::new(),
            in_flight: false,
            notice: None,
        }
    }

    pub fn step(&self) -> WorkflowStep {
        self.step
    }

    pub fn unmapped(&self) -> &[UnmappedProduct] {
        &self.unmapped
    }

    pub fn session(&self) -> Option<&MappingSession> {
        self.session.as_ref()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Строка (с 1), не прошедшая проверку
    pub fn invalid_row(&self) -> Option<usize> {
        match &self.notice {
            Some(Notice::Invalid(err)) => err.row(),
            _ => None,
        }
    }

    fn editable(&self) -> bool {
        self.step == WorkflowStep::Mapping && !self.in_flight
    }

    pub fn dispatch(&mut self, event: MappingEvent) -> Option<MappingCommand> {
        match event {
            MappingEvent::StartMapping => {
                if self.step == WorkflowStep::Mapping {
                    return None;
                }
                let session = MappingSession::open(self.unmapped.clone());
                log::info!(
                    "Mapping session {} opened with {} unmapped products",
                    session.id,
                    session.products().len()
                );
                self.session = Some(session);
                self.step = WorkflowStep::Mapping;
                self.rows = vec![String::new()];
                self.notice = None;
                None
            }
            MappingEvent::RowAdded => {
                if self.editable() {
                    self.rows.push(String::new());
                }
                None
            }
            MappingEvent::RowChanged { index, filename } => {
                if self.editable() {
                    if let Some(row) = self.rows.get_mut(index) {
                        *row = filename;
                    }
                }
                None
            }
            MappingEvent::RowRemoved { index } => {
                if self.editable() && index < self.rows.len() {
                    self.rows.remove(index);
                }
                None
            }
            MappingEvent::SubmitClicked => self.submit(),
            MappingEvent::SubmissionFinished(outcome) => {
                self.finish(outcome);
                None
            }
            MappingEvent::Cancel => {
                if self.editable() {
                    if let Some(session) = self.session.take() {
                        log::info!("Mapping session {} cancelled", session.id);
                    }
                    self.step = WorkflowStep::Reconcile;
                    self.rows.clear();
                    self.notice = None;
                }
                None
            }
        }
    }

    fn submit(&mut self) -> Option<MappingCommand> {
        if self.step != WorkflowStep::Mapping {
            return None;
        }
        if self.in_flight {
            log::warn!("Submit ignored: mapping batch already in flight");
            return None;
        }
        let session = self.session.as_ref()?;

        let mappings = match collect_mappings(self.rows.as_slice()) {
            Ok(mappings) => mappings,
            Err(err) => {
                self.notice = Some(Notice::Invalid(err));
                return None;
            }
        };

        let assignments = expand_assignments(&mappings, session.products());
        if assignments.is_empty() {
            self.notice = Some(Notice::NothingToMap);
            return None;
        }

        log::info!(
            "Submitting {} assignments ({} filenames x {} products) for session {}",
            assignments.len(),
            mappings.len(),
            session.products().len(),
            session.id
        );
        self.in_flight = true;
        self.notice = None;
        Some(MappingCommand::Submit {
            session_id: session.id,
            request: ApplyMappingRequest {
                mappings: assignments,
            },
        })
    }

    fn finish(&mut self, outcome: ApplyMappingOutcome) {
        if !self.in_flight {
            log::warn!("Submission result without a request in flight: {:?}", outcome);
            return;
        }
        self.in_flight = false;

        match outcome {
            ApplyMappingOutcome::Mapped { mapped_count } => {
                if let Some(session) = self.session.take() {
                    let elapsed = Utc::now() - session.opened_at;
                    log::info!(
                        "Mapping session {} confirmed: {} rows mapped after {}s",
                        session.id,
                        mapped_count,
                        elapsed.num_seconds()
                    );
                }
                self.step = WorkflowStep::Confirmed { mapped_count };
                self.rows.clear();
                self.notice = None;
            }
            ApplyMappingOutcome::Rejected { message } => {
                log::warn!("Backend rejected mapping batch: {}", message);
                self.notice = Some(Notice::Rejected(message));
            }
            ApplyMappingOutcome::TransportFailed { message } => {
                log::error!("Mapping batch transport failure: {}", message);
                self.notice = Some(Notice::Transport);
            }
        }
    }
}
