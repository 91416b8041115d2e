// handlers/collection/mod.rs - Shared CRUD handlers
//
// One generic implementation of list/create/update/delete, instantiated per
// content type at routing time (`list::<Project>`, `create::<Contact>`, ...).
// Whether a verb is public or admin-only is decided by the router, which puts
// `admin_gate` in front of the protected instantiations.

pub mod create; // POST   /<collection>
pub mod delete; // DELETE /<collection>/:id
pub mod list; // GET    /<collection>
pub mod update; // PUT    /<collection>/:id

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use update::update;

/*
ACCESS MATRIX (enforced in lib.rs):

| collection  | GET   | POST  | PUT   | DELETE |
|-------------|-------|-------|-------|--------|
| projects    | open  | admin | admin | admin  |
| clients     | open  | admin | admin | admin  |
| contact     | admin | open  | -     | -      |
| newsletter  | admin | open  | -     | -      |

Update and delete only compile for `Patchable` types, so the read-only
collections cannot be wired to them by accident.
*/
