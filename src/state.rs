use crate::services::store::RecordStore;

pub struct AppState {
    pub store: Box<dyn RecordStore>,
}
