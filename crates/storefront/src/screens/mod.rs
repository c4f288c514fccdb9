//! Слой экранов: локальное состояние + чистые view-функции.
//!
//! Каждый экран - это (а) сериализуемый тип локального состояния (если
//! оно есть) и (б) функция `view`, строящая view-model из состояния и
//! статических данных. Ничего не рисуется: view-model - данные для
//! внешнего слоя отрисовки.

pub mod cart;
pub mod home;
pub mod login;
pub mod product_detail;
pub mod products;
pub mod profile;
pub mod register;
pub mod splash;
