//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. All repositories expose the same
//! uniform surface: `create`, `find_by_id` (with field projection and
//! conditional navigation fetches), `list` (filter/search/sort/paginate via
//! the shared query builder), `update` (wholesale), `patch` (partial), and
//! `delete` (hard).

pub mod account_settlement_repo;
pub mod appointment_repo;
pub mod appointment_service_repo;
pub mod chief_complaint_repo;
pub mod goods_receipt_item_repo;
pub mod goods_receipt_repo;
pub mod goods_return_repo;
pub mod item_repo;
pub mod location_repo;
pub mod purchase_order_line_repo;
pub mod purchase_order_repo;
pub mod service_repo;
pub mod stock_adjustment_repo;
pub mod supplier_repo;

pub use account_settlement_repo::AccountSettlementRepo;
pub use appointment_repo::AppointmentRepo;
pub use appointment_service_repo::AppointmentServiceRepo;
pub use chief_complaint_repo::ChiefComplaintRepo;
pub use goods_receipt_item_repo::GoodsReceiptItemRepo;
pub use goods_receipt_repo::GoodsReceiptRepo;
pub use goods_return_repo::GoodsReturnRepo;
pub use item_repo::ItemRepo;
pub use location_repo::LocationRepo;
pub use purchase_order_line_repo::PurchaseOrderLineRepo;
pub use purchase_order_repo::PurchaseOrderRepo;
pub use service_repo::ServiceRepo;
pub use stock_adjustment_repo::StockAdjustmentRepo;
pub use supplier_repo::SupplierRepo;
