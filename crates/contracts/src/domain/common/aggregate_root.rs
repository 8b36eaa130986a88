use super::AggregateId;

/// Трейт для корня агрегата
///
/// Клиент только читает и удаляет записи, поэтому здесь остались лишь ID
/// и статические имена, по которым строятся URL, ключи табов и заголовки.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя ресурса в REST API (например, "gasmeterreadings")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;
}
