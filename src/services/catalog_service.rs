use crate::dto::catalog_dto::{
    CreateClassPayload, CreatePdfPayload, CreateSeriesPayload, CreateSubjectPayload,
};
use crate::error::{Error, Result};
use crate::models::academic_class::AcademicClass;
use crate::models::pdf_resource::PdfResource;
use crate::models::subject::Subject;
use crate::models::test_series::TestSeries;
use crate::store::EntityStore;
use std::sync::Arc;

/// CRUD over the catalog hierarchy: classes, subjects, test series, and
/// PDF resources. Listing only ever surfaces active records.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn EntityStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create_class(&self, payload: CreateClassPayload) -> Result<AcademicClass> {
        self.store.insert_class(payload.into_new()).await
    }

    pub async fn list_classes(&self) -> Result<Vec<AcademicClass>> {
        self.store.list_classes().await
    }

    pub async fn get_class(&self, id: i32) -> Result<AcademicClass> {
        self.store
            .get_class(id)
            .await?
            .ok_or_else(|| Error::NotFound("Class not found".to_string()))
    }

    pub async fn create_subject(&self, payload: CreateSubjectPayload) -> Result<Subject> {
        if self.store.get_class(payload.class_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "class_id {} references a nonexistent class",
                payload.class_id
            )));
        }
        self.store.insert_subject(payload.into_new()).await
    }

    pub async fn list_subjects(&self, class_id: Option<i32>) -> Result<Vec<Subject>> {
        self.store.list_subjects(class_id).await
    }

    pub async fn get_subject(&self, id: i32) -> Result<Subject> {
        self.store
            .get_subject(id)
            .await?
            .ok_or_else(|| Error::NotFound("Subject not found".to_string()))
    }

    pub async fn create_series(&self, payload: CreateSeriesPayload) -> Result<TestSeries> {
        if self.store.get_subject(payload.subject_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "subject_id {} references a nonexistent subject",
                payload.subject_id
            )));
        }
        self.store.insert_series(payload.into_new()).await
    }

    pub async fn list_series(&self, subject_id: Option<i32>) -> Result<Vec<TestSeries>> {
        self.store.list_series(subject_id).await
    }

    pub async fn get_series(&self, id: i32) -> Result<TestSeries> {
        self.store
            .get_series(id)
            .await?
            .ok_or_else(|| Error::NotFound("Test series not found".to_string()))
    }

    /// Tests under the series are left in place; series deletion does not
    /// cascade downward.
    pub async fn delete_series(&self, id: i32) -> Result<()> {
        if self.store.delete_series(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Test series not found".to_string()))
        }
    }

    pub async fn create_pdf(&self, payload: CreatePdfPayload) -> Result<PdfResource> {
        if self.store.get_series(payload.test_series_id).await?.is_none() {
            return Err(Error::BadRequest(format!(
                "test_series_id {} references a nonexistent series",
                payload.test_series_id
            )));
        }
        self.store.insert_pdf(payload.into_new()).await
    }

    pub async fn list_pdfs(&self, series_id: Option<i32>) -> Result<Vec<PdfResource>> {
        self.store.list_pdfs(series_id).await
    }

    pub async fn delete_pdf(&self, id: i32) -> Result<()> {
        if self.store.delete_pdf(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("PDF resource not found".to_string()))
        }
    }
}
