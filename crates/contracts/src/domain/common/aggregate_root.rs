/// Identifier assigned by the API (autoincrement integer).
pub type EntityId = i64;

/// Трейт для корня агрегата
///
/// The API owns every record; the client only holds snapshots, so the trait is limited to
/// identity and the static metadata used to build REST paths and UI labels.
pub trait AggregateRoot {
    /// Получить ID записи
    fn id(&self) -> EntityId;

    /// Human readable name of the record (alias, tenant name, ...)
    fn description(&self) -> String;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection name, also the path segment (`/departamentos`)
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Path of the collection endpoint.
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Path of a single record endpoint.
    fn item_path(id: EntityId) -> String {
        format!("/{}/{}", Self::collection_name(), id)
    }
}
