use diesel::prelude::*;
use pushkind_common::db::DbConnection;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::collection::{BannerRow, CollectionDetailRecord, SectionImage, SectionRow};
use crate::domain::types::{CollectionId, SectionId, SectionKind, TypeConstraintError};
use crate::models::collection::{BannerChangeset, CollectionDetail as DbCollectionDetail};
use crate::models::section::{
    Section1 as DbSection1, Section2 as DbSection2, Section3 as DbSection3,
    Section4 as DbSection4,
};
use crate::models::section_image::SectionImage as DbSectionImage;
use crate::repository::{CollectionReader, CollectionWriter, DieselRepository, SectionReader};

fn into_section_rows<T>(rows: Vec<T>) -> RepositoryResult<Vec<SectionRow>>
where
    T: TryInto<SectionRow, Error = TypeConstraintError>,
{
    let rows = rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<SectionRow>, _>>()?;
    Ok(rows)
}

fn delete_section_images(
    conn: &mut DbConnection,
    kind: SectionKind,
    section_ids: &[i32],
) -> QueryResult<usize> {
    use crate::schema::section_images;

    diesel::delete(
        section_images::table
            .filter(section_images::section_type.eq(kind.as_str()))
            .filter(section_images::section_id.eq_any(section_ids)),
    )
    .execute(conn)
}

/// Removes every section of one table belonging to a collection, images first.
macro_rules! delete_sections {
    ($conn:expr, $table:ident, $kind:expr, $detail_id:expr) => {{
        let ids: Vec<i32> = $table::table
            .filter($table::collection_detail_id.eq($detail_id))
            .select($table::id)
            .load($conn)?;
        delete_section_images($conn, $kind, &ids)?;
        diesel::delete($table::table.filter($table::collection_detail_id.eq($detail_id)))
            .execute($conn)?;
    }};
}

impl CollectionReader for DieselRepository {
    fn get_collection_detail(
        &self,
        id: CollectionId,
    ) -> RepositoryResult<Option<CollectionDetailRecord>> {
        use crate::schema::collection_details;

        let mut conn = self.conn()?;

        let detail = collection_details::table
            .filter(collection_details::id.eq(id.get()))
            .first::<DbCollectionDetail>(&mut conn)
            .optional()?;

        let detail = detail.map(TryInto::try_into).transpose()?;
        Ok(detail)
    }
}

impl SectionReader for DieselRepository {
    fn list_sections(
        &self,
        kind: SectionKind,
        collection_id: CollectionId,
    ) -> RepositoryResult<Vec<SectionRow>> {
        use crate::schema::{
            collection_sections, collection_sections2, collection_sections3, collection_sections4,
        };

        let mut conn = self.conn()?;
        let detail_id = collection_id.get();

        match kind {
            SectionKind::Section1 => into_section_rows(
                collection_sections::table
                    .filter(collection_sections::collection_detail_id.eq(detail_id))
                    .order(collection_sections::id.asc())
                    .load::<DbSection1>(&mut conn)?,
            ),
            SectionKind::Section2 => into_section_rows(
                collection_sections2::table
                    .filter(collection_sections2::collection_detail_id.eq(detail_id))
                    .order(collection_sections2::id.asc())
                    .load::<DbSection2>(&mut conn)?,
            ),
            SectionKind::Section3 => into_section_rows(
                collection_sections3::table
                    .filter(collection_sections3::collection_detail_id.eq(detail_id))
                    .order(collection_sections3::id.asc())
                    .load::<DbSection3>(&mut conn)?,
            ),
            SectionKind::Section4 => into_section_rows(
                collection_sections4::table
                    .filter(collection_sections4::collection_detail_id.eq(detail_id))
                    .order(collection_sections4::id.asc())
                    .load::<DbSection4>(&mut conn)?,
            ),
        }
    }

    fn list_section_images(
        &self,
        section_id: SectionId,
        kind: SectionKind,
    ) -> RepositoryResult<Vec<SectionImage>> {
        use crate::schema::section_images;

        let mut conn = self.conn()?;

        let images = section_images::table
            .filter(section_images::section_id.eq(section_id.get()))
            .filter(section_images::section_type.eq(kind.as_str()))
            .order(section_images::id.asc())
            .load::<DbSectionImage>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(images)
    }
}

impl CollectionWriter for DieselRepository {
    fn update_banner(&self, id: CollectionId, banner: &BannerRow) -> RepositoryResult<usize> {
        use crate::schema::collection_details;

        let mut conn = self.conn()?;

        let affected =
            diesel::update(collection_details::table.filter(collection_details::id.eq(id.get())))
                .set((
                    BannerChangeset::from(banner),
                    collection_details::updated_at.eq(diesel::dsl::now),
                ))
                .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_collection(&self, id: CollectionId) -> RepositoryResult<usize> {
        use crate::schema::{
            collection_details, collection_sections, collection_sections2, collection_sections3,
            collection_sections4,
        };

        let mut conn = self.conn()?;
        let detail_id = id.get();

        let affected = conn.transaction(|conn| {
            delete_sections!(conn, collection_sections, SectionKind::Section1, detail_id);
            delete_sections!(conn, collection_sections2, SectionKind::Section2, detail_id);
            delete_sections!(conn, collection_sections3, SectionKind::Section3, detail_id);
            delete_sections!(conn, collection_sections4, SectionKind::Section4, detail_id);

            diesel::delete(collection_details::table.filter(collection_details::id.eq(detail_id)))
                .execute(conn)
        })?;

        Ok(affected)
    }
}
