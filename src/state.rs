use std::sync::Arc;

use crate::models::{BlogRecord, SummaryRecord};
use crate::services::alert_service::MarketAlertService;
use crate::services::blog_service::BlogService;
use crate::services::summary_service::SummaryService;
use crate::store::RecordCollection;

#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<RecordCollection<BlogRecord>>,
    pub summaries: Arc<RecordCollection<SummaryRecord>>,
    pub blog_service: Arc<BlogService>,
    pub summary_service: Arc<SummaryService>,
    pub alert_service: Arc<MarketAlertService>,
}
