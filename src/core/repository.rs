use crate::core::library::LibraryResult;

// Repository is the storage seam for an ordered collection of entities.
// Implementations must apply each call atomically.
pub trait Repository<Entity>: Sync + Send {
    // appends an entity
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // appends all entities or none of them
    fn create_all(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // replaces an entity in place, checking its version
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    fn list(&self) -> LibraryResult<Vec<Entity>>;
}
