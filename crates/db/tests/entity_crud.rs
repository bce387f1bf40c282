//! Integration tests for the repository layer against a live PostgreSQL.
//!
//! Covers the uniform CRUD surface plus the behaviours that matter across
//! every entity: field projection, conditional navigation fetches,
//! deterministic pagination, typed filters, and partial updates.

use emr_core::filter::FilterCriteria;
use emr_core::paging::{ListRequest, Page, Sort, SortOrder};
use emr_db::models::appointment::{CreateAppointment, PatchAppointment};
use emr_db::models::chief_complaint::CreateChiefComplaint;
use emr_db::models::item::CreateItem;
use emr_db::models::location::{CreateLocation, UpdateLocation};
use emr_db::models::purchase_order::CreatePurchaseOrder;
use emr_db::models::purchase_order_line::CreatePurchaseOrderLine;
use emr_db::models::supplier::CreateSupplier;
use emr_db::projection::FieldSelection;
use emr_db::repositories::{
    AppointmentRepo, ChiefComplaintRepo, ItemRepo, LocationRepo, PurchaseOrderLineRepo,
    PurchaseOrderRepo, SupplierRepo,
};
use emr_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_location(pool: &PgPool, name: &str) -> DbId {
    LocationRepo::create(
        pool,
        &CreateLocation {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("location creation should succeed")
}

async fn create_supplier(pool: &PgPool, name: &str) -> DbId {
    SupplierRepo::create(
        pool,
        &CreateSupplier {
            name: name.to_string(),
            contact_person: Some("J. Mensah".to_string()),
            email: None,
            phone: None,
        },
    )
    .await
    .expect("supplier creation should succeed")
}

async fn create_appointment(pool: &PgPool, patient: &str, status: Option<&str>) -> DbId {
    AppointmentRepo::create(
        pool,
        &CreateAppointment {
            patient_name: patient.to_string(),
            scheduled_at: chrono::Utc::now(),
            status: status.map(str::to_string),
            reason: None,
        },
    )
    .await
    .expect("appointment creation should succeed")
}

// ---------------------------------------------------------------------------
// Create and fetch
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn create_then_fetch_returns_all_scalars(pool: PgPool) {
    let id = create_location(&pool, "Main Pharmacy").await;

    let value = LocationRepo::find_by_id(&pool, id, &FieldSelection::parse(None))
        .await
        .expect("fetch should succeed")
        .expect("row should exist");

    assert_eq!(value["id"], id.to_string());
    assert_eq!(value["name"], "Main Pharmacy");
    assert!(value["created_at"].is_string());
    assert!(value["updated_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn fetch_missing_row_returns_none(pool: PgPool) {
    let missing = LocationRepo::find_by_id(&pool, Uuid::new_v4(), &FieldSelection::parse(None))
        .await
        .expect("fetch should succeed");
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn item_defaults_apply_on_create(pool: PgPool) {
    let id = ItemRepo::create(
        &pool,
        &CreateItem {
            code: "AMOX-500".to_string(),
            name: "Amoxicillin 500mg".to_string(),
            unit: None,
            reorder_level: None,
            description: None,
        },
    )
    .await
    .expect("item creation should succeed");

    let value = ItemRepo::find_by_id(&pool, id, &FieldSelection::parse(None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(value["unit"], "each");
    assert_eq!(value["reorder_level"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn duplicate_item_code_violates_unique_constraint(pool: PgPool) {
    let dto = CreateItem {
        code: "GLOVE-M".to_string(),
        name: "Gloves (M)".to_string(),
        unit: None,
        reorder_level: None,
        description: None,
    };
    ItemRepo::create(&pool, &dto).await.unwrap();

    let err = ItemRepo::create(&pool, &dto)
        .await
        .expect_err("duplicate code should be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_items_code"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Projection and navigations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn projection_limits_returned_fields(pool: PgPool) {
    let id = create_location(&pool, "Ward B Store").await;

    let value = LocationRepo::find_by_id(&pool, id, &FieldSelection::parse(Some("name")))
        .await
        .unwrap()
        .unwrap();

    let obj = value.as_object().expect("projected value is an object");
    assert_eq!(obj.len(), 2, "only id and name should survive projection");
    assert_eq!(value["name"], "Ward B Store");
    assert_eq!(value["id"], id.to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn navigation_is_fetched_only_when_selected(pool: PgPool) {
    let supplier_id = create_supplier(&pool, "Accra Medical Supplies").await;
    let order_id = PurchaseOrderRepo::create(
        &pool,
        &CreatePurchaseOrder {
            supplier_id,
            order_number: "PO-2024-0001".to_string(),
            ordered_at: None,
            status: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    // Without the navigation in the selection it is absent.
    let bare = PurchaseOrderRepo::find_by_id(&pool, order_id, &FieldSelection::parse(None))
        .await
        .unwrap()
        .unwrap();
    assert!(bare.get("supplier").is_none());

    // With it, the related row is embedded and itself projected.
    let selection = FieldSelection::parse(Some("order_number,supplier.name"));
    let with_nav = PurchaseOrderRepo::find_by_id(&pool, order_id, &selection)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_nav["order_number"], "PO-2024-0001");
    assert_eq!(with_nav["supplier"]["name"], "Accra Medical Supplies");
    assert_eq!(with_nav["supplier"]["id"], supplier_id.to_string());
    assert!(with_nav["supplier"].get("contact_person").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn collection_navigation_embeds_child_rows(pool: PgPool) {
    let supplier_id = create_supplier(&pool, "Kumasi Pharma Ltd").await;
    let order_id = PurchaseOrderRepo::create(
        &pool,
        &CreatePurchaseOrder {
            supplier_id,
            order_number: "PO-2024-0002".to_string(),
            ordered_at: None,
            status: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    let item_id = ItemRepo::create(
        &pool,
        &CreateItem {
            code: "SYR-5ML".to_string(),
            name: "Syringe 5ml".to_string(),
            unit: None,
            reorder_level: None,
            description: None,
        },
    )
    .await
    .unwrap();

    for quantity in [10, 20] {
        PurchaseOrderLineRepo::create(
            &pool,
            &CreatePurchaseOrderLine {
                purchase_order_id: order_id,
                item_id,
                quantity,
                unit_price: 1.25,
            },
        )
        .await
        .unwrap();
    }

    let selection = FieldSelection::parse(Some("lines"));
    let value = PurchaseOrderRepo::find_by_id(&pool, order_id, &selection)
        .await
        .unwrap()
        .unwrap();

    let lines = value["lines"].as_array().expect("lines is an array");
    assert_eq!(lines.len(), 2);
    // A bare navigation name projects each element down to its id.
    for line in lines {
        let obj = line.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("id"));
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn pagination_is_deterministic_across_pages(pool: PgPool) {
    let appointment_id = create_appointment(&pool, "Ama Owusu", None).await;
    for complaint in ["headache", "fever", "cough"] {
        ChiefComplaintRepo::create(
            &pool,
            &CreateChiefComplaint {
                appointment_id,
                complaint: complaint.to_string(),
                onset: None,
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let sort = Some(Sort {
        field: "complaint".to_string(),
        order: SortOrder::Asc,
    });

    let page1 = ChiefComplaintRepo::list(
        &pool,
        &ListRequest {
            page: Page::new(1, 2).unwrap(),
            sort: sort.clone(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let page2 = ChiefComplaintRepo::list(
        &pool,
        &ListRequest {
            page: Page::new(2, 2).unwrap(),
            sort,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(page1.len(), 2);
    assert_eq!(page2.len(), 1);

    let complaints: Vec<_> = page1
        .iter()
        .chain(page2.iter())
        .map(|c| c.complaint.as_str())
        .collect();
    assert_eq!(complaints, ["cough", "fever", "headache"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn typed_filter_matches_expected_rows(pool: PgPool) {
    create_appointment(&pool, "Kofi Asante", Some("completed")).await;
    create_appointment(&pool, "Efua Darko", None).await;

    let req = ListRequest {
        filters: vec![FilterCriteria {
            property_name: "status".to_string(),
            operator: "eq".to_string(),
            value: "completed".to_string(),
        }],
        ..Default::default()
    };
    let rows = AppointmentRepo::list(&pool, &req).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].patient_name, "Kofi Asante");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn search_matches_any_text_column(pool: PgPool) {
    create_location(&pool, "Dispensary").await;
    LocationRepo::create(
        &pool,
        &CreateLocation {
            name: "Theatre Store".to_string(),
            description: Some("main dispensary overflow".to_string()),
        },
    )
    .await
    .unwrap();

    let req = ListRequest {
        search: Some("dispensary".to_string()),
        ..Default::default()
    };
    let rows = LocationRepo::list(&pool, &req).await.unwrap();

    assert_eq!(rows.len(), 2, "search should hit name and description");
}

// ---------------------------------------------------------------------------
// Update, patch, delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn update_replaces_all_columns(pool: PgPool) {
    let id = create_location(&pool, "Old Name").await;

    let updated = LocationRepo::update(
        &pool,
        id,
        &UpdateLocation {
            name: "New Name".to_string(),
            description: Some("renamed".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(updated);

    let value = LocationRepo::find_by_id(&pool, id, &FieldSelection::parse(None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(value["name"], "New Name");
    assert_eq!(value["description"], "renamed");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn patch_changes_only_provided_fields(pool: PgPool) {
    let id = create_appointment(&pool, "Yaw Boateng", None).await;

    let patched = AppointmentRepo::patch(
        &pool,
        id,
        &PatchAppointment {
            status: Some("completed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(patched);

    let value = AppointmentRepo::find_by_id(&pool, id, &FieldSelection::parse(None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(value["status"], "completed");
    assert_eq!(value["patient_name"], "Yaw Boateng");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn update_and_patch_report_missing_rows(pool: PgPool) {
    let missing = Uuid::new_v4();

    let updated = LocationRepo::update(
        &pool,
        missing,
        &UpdateLocation {
            name: "Ghost".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(!updated);

    let patched = AppointmentRepo::patch(&pool, missing, &PatchAppointment::default())
        .await
        .unwrap();
    assert!(!patched);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn delete_removes_row_and_reports_misses(pool: PgPool) {
    let id = create_location(&pool, "Temporary Store").await;

    assert!(LocationRepo::delete(&pool, id).await.unwrap());
    assert!(
        LocationRepo::find_by_id(&pool, id, &FieldSelection::parse(None))
            .await
            .unwrap()
            .is_none()
    );
    assert!(!LocationRepo::delete(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires PostgreSQL"]
async fn deleting_appointment_cascades_to_children(pool: PgPool) {
    let appointment_id = create_appointment(&pool, "Abena Sarpong", None).await;
    let complaint_id = ChiefComplaintRepo::create(
        &pool,
        &CreateChiefComplaint {
            appointment_id,
            complaint: "chest pain".to_string(),
            onset: None,
            notes: None,
        },
    )
    .await
    .unwrap();

    assert!(AppointmentRepo::delete(&pool, appointment_id).await.unwrap());

    let orphan =
        ChiefComplaintRepo::find_by_id(&pool, complaint_id, &FieldSelection::parse(None))
            .await
            .unwrap();
    assert!(orphan.is_none(), "cascade should remove child complaints");
}
