//! Collection page composition.
//!
//! A collection page is stored as one row with flat banner columns plus four
//! section tables whose rows own ordered image lists. [`assemble_collection`]
//! turns those rows into a single [`CollectionDetail`].

use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::collection::{Banner, CollectionDetail, SectionShape};
use crate::domain::types::CollectionId;
use crate::forms::collections::{DeleteCollectionFormPayload, UpdateBannerFormPayload};
use crate::repository::{CollectionReader, CollectionWriter, SectionReader};

use super::{ServiceError, ServiceResult};

/// Load every section of kind `S` for a collection with its images.
///
/// Sections keep repository order. Images are sorted by `order`; the sort is
/// stable, so equal positions keep insertion order.
pub fn assemble_sections<S, R>(repo: &R, collection_id: CollectionId) -> RepositoryResult<Vec<S>>
where
    S: SectionShape,
    R: SectionReader + ?Sized,
{
    repo.list_sections(S::KIND, collection_id)?
        .into_iter()
        .map(|row| -> RepositoryResult<S> {
            let mut images = repo.list_section_images(row.id, S::KIND)?;
            images.sort_by_key(|image| image.order);
            Ok(S::from_row(row, images))
        })
        .collect()
}

/// Compose the full collection page.
///
/// Returns `Ok(None)` when the collection does not exist. Repository errors
/// are returned as-is and no partially built page escapes.
pub fn assemble_collection<R>(
    repo: &R,
    collection_id: CollectionId,
) -> RepositoryResult<Option<CollectionDetail>>
where
    R: CollectionReader + SectionReader + ?Sized,
{
    let Some(record) = repo.get_collection_detail(collection_id)? else {
        return Ok(None);
    };

    Ok(Some(CollectionDetail {
        id: record.id,
        name: record.name,
        banner: Banner::nest(record.banner),
        sections: assemble_sections(repo, collection_id)?,
        sections2: assemble_sections(repo, collection_id)?,
        sections3: assemble_sections(repo, collection_id)?,
        sections4: assemble_sections(repo, collection_id)?,
    }))
}

/// Core business logic for the collection page.
///
/// Non-positive ids and missing collections are reported as
/// [`ServiceError::NotFound`].
pub fn show_collection<R>(collection_id: i32, repo: &R) -> ServiceResult<CollectionDetail>
where
    R: CollectionReader + SectionReader,
{
    let collection_id = match CollectionId::new(collection_id) {
        Ok(collection_id) => collection_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match assemble_collection(repo, collection_id) {
        Ok(Some(detail)) => Ok(detail),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to assemble collection {collection_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new banner for an existing collection.
///
/// Returns `Ok(false)` when the write itself failed and
/// [`ServiceError::NotFound`] when the collection vanished before the write.
pub fn update_banner<R>(payload: UpdateBannerFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CollectionReader + CollectionWriter,
{
    match repo.get_collection_detail(payload.collection_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get collection: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let row = payload.banner.flatten();
    match repo.update_banner(payload.collection_id, &row) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update banner: {e}");
            Ok(false)
        }
    }
}

/// Remove a collection page with all of its sections and images.
pub fn delete_collection<R>(payload: DeleteCollectionFormPayload, repo: &R) -> ServiceResult<bool>
where
    R: CollectionReader + CollectionWriter,
{
    let collection_id = payload.collection_id;

    match repo.get_collection_detail(collection_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get collection: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_collection(collection_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete collection: {e}");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::{
        BannerRow, CollectionDetailRecord, Link, Section1, SectionImage, SectionRow,
    };
    use crate::domain::types::{SectionId, SectionKind};
    use crate::repository::test::TestRepository;

    fn collection_id() -> CollectionId {
        CollectionId::new(1).unwrap()
    }

    fn banner_row() -> BannerRow {
        BannerRow {
            image: "/uploads/loft.webp".into(),
            title: "Loft".into(),
            description: "Industrial lines".into(),
            link_text: "Discover".into(),
            link_url: "/collections/loft#sections".into(),
        }
    }

    fn record() -> CollectionDetailRecord {
        CollectionDetailRecord {
            id: collection_id(),
            name: "Loft".into(),
            banner: banner_row(),
        }
    }

    fn row(id: i32, title: &str) -> SectionRow {
        SectionRow {
            id: SectionId::new(id).unwrap(),
            title: title.into(),
            description: format!("{title} description"),
            link_text: String::new(),
            link_url: String::new(),
            secondary_title: None,
            secondary_description: None,
        }
    }

    fn image(src: &str, order: i32) -> SectionImage {
        SectionImage {
            src: src.into(),
            alt: String::new(),
            order,
        }
    }

    fn sample_payload() -> UpdateBannerFormPayload {
        UpdateBannerFormPayload {
            collection_id: collection_id(),
            banner: Banner {
                image: "/uploads/new.webp".into(),
                title: "New".into(),
                description: String::new(),
                link: Link {
                    text: "Go".into(),
                    url: "/go".into(),
                },
            },
        }
    }

    #[test]
    fn missing_collection_is_none() {
        let repo = TestRepository::default();

        let detail = assemble_collection(&repo, collection_id()).unwrap();

        assert!(detail.is_none());
    }

    #[test]
    fn empty_collection_has_all_section_lists() {
        let repo = TestRepository::new(vec![], vec![record()]);

        let detail = assemble_collection(&repo, collection_id()).unwrap().unwrap();

        assert_eq!(detail.banner, Banner::nest(banner_row()));
        assert!(detail.sections.is_empty());
        assert!(detail.sections2.is_empty());
        assert!(detail.sections3.is_empty());
        assert!(detail.sections4.is_empty());
        let value = serde_json::to_value(&detail).unwrap();
        for key in ["sections", "sections2", "sections3", "sections4"] {
            assert_eq!(value[key], serde_json::json!([]), "{key}");
        }
    }

    #[test]
    fn images_sorted_by_order_with_stable_ties() {
        let section_id = SectionId::new(10).unwrap();
        let repo = TestRepository::new(vec![], vec![record()])
            .with_sections(SectionKind::Section3, collection_id(), vec![row(10, "Gallery")])
            .with_images(
                SectionKind::Section3,
                section_id,
                vec![
                    image("c.webp", 2),
                    image("a.webp", 0),
                    image("b1.webp", 1),
                    image("b2.webp", 1),
                ],
            );

        let detail = assemble_collection(&repo, collection_id()).unwrap().unwrap();

        let srcs: Vec<&str> = detail.sections3[0]
            .images
            .iter()
            .map(|image| image.src.as_str())
            .collect();
        assert_eq!(srcs, vec!["a.webp", "b1.webp", "b2.webp", "c.webp"]);
    }

    #[test]
    fn images_are_matched_by_kind() {
        let section_id = SectionId::new(5).unwrap();
        let repo = TestRepository::new(vec![], vec![record()])
            .with_sections(SectionKind::Section1, collection_id(), vec![row(5, "First")])
            .with_sections(SectionKind::Section4, collection_id(), vec![row(5, "Last")])
            .with_images(SectionKind::Section4, section_id, vec![image("last.webp", 0)]);

        let detail = assemble_collection(&repo, collection_id()).unwrap().unwrap();

        assert!(detail.sections[0].images.is_empty());
        assert_eq!(detail.sections4[0].images.len(), 1);
    }

    #[test]
    fn sections_keep_repository_order() {
        let repo = TestRepository::new(vec![], vec![record()]).with_sections(
            SectionKind::Section1,
            collection_id(),
            vec![row(9, "Nine"), row(2, "Two"), row(5, "Five")],
        );

        let sections: Vec<Section1> = assemble_sections(&repo, collection_id()).unwrap();

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Nine", "Two", "Five"]);
    }

    #[test]
    fn section2_carries_secondary_text() {
        let mut second = row(3, "Split");
        second.secondary_title = Some("Right".into());
        second.secondary_description = Some("Right column".into());
        let repo = TestRepository::new(vec![], vec![record()]).with_sections(
            SectionKind::Section2,
            collection_id(),
            vec![second],
        );

        let detail = assemble_collection(&repo, collection_id()).unwrap().unwrap();

        assert_eq!(detail.sections2[0].secondary_title, "Right");
        assert_eq!(detail.sections2[0].secondary_description, "Right column");
    }

    #[test]
    fn fetch_failure_propagates_without_partial_result() {
        let repo = TestRepository::new(vec![], vec![record()])
            .with_sections(SectionKind::Section1, collection_id(), vec![row(1, "Ok")])
            .failing_sections(SectionKind::Section4);

        assert!(assemble_collection(&repo, collection_id()).is_err());
    }

    #[test]
    fn show_collection_maps_missing_to_not_found() {
        let repo = TestRepository::new(vec![], vec![record()]);

        assert_eq!(show_collection(2, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(show_collection(0, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(show_collection(1, &repo).unwrap().name, "Loft");
    }

    #[test]
    fn show_collection_maps_fetch_failure_to_internal() {
        let repo = TestRepository::new(vec![], vec![record()])
            .failing_sections(SectionKind::Section2);

        assert_eq!(show_collection(1, &repo).unwrap_err(), ServiceError::Internal);
    }

    #[test]
    fn update_banner_writes_flat_columns() {
        let repo = TestRepository::new(vec![], vec![record()]);

        assert!(update_banner(sample_payload(), &repo).unwrap());

        let written = repo.written_banners();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].1.link_text, "Go");
        assert_eq!(written[0].1.link_url, "/go");
        assert_eq!(written[0].1.image, "/uploads/new.webp");
    }

    #[test]
    fn update_banner_requires_existing_collection() {
        let repo = TestRepository::default();

        let err = update_banner(sample_payload(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
        assert!(repo.written_banners().is_empty());
    }

    #[test]
    fn update_banner_reports_failed_write() {
        let repo = TestRepository::new(vec![], vec![record()]).failing_writes();

        assert!(!update_banner(sample_payload(), &repo).unwrap());
        assert!(repo.written_banners().is_empty());
    }

    #[test]
    fn update_banner_on_vanished_row_is_not_found() {
        let repo = TestRepository::new(vec![], vec![record()]).unwritable(collection_id());

        let err = update_banner(sample_payload(), &repo).unwrap_err();

        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn blank_collection_name_still_assembles() {
        let mut blank = record();
        blank.name = String::new();
        let repo = TestRepository::new(vec![], vec![blank]);

        let detail = show_collection(1, &repo).unwrap();

        assert_eq!(detail.name, "");
        assert_eq!(detail.banner, Banner::nest(banner_row()));
    }

    #[test]
    fn delete_collection_requires_existing_collection() {
        let repo = TestRepository::new(vec![], vec![record()]);

        let payload = |id| DeleteCollectionFormPayload {
            collection_id: CollectionId::new(id).unwrap(),
        };

        assert!(delete_collection(payload(1), &repo).unwrap());
        assert_eq!(
            delete_collection(payload(3), &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
