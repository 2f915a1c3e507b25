//! Implements an arena-allocated binary search tree and interfaces to work with it.
//!
//! # Overview
//! Boxwood implements a binary search tree using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the nodes, typically a [`Vec`] (or its variants, like [`SmallVec`] or [`ArrayVec`]), and instead of using pointers to link to children, indices into the storage are used instead. This avoids aliased mutable parent/child references entirely, keeps insertion cheap, and gives room for supporting configurations without a global memory allocator.
//!
//! The tree itself is an *insertion-ordered* search tree: a node's left subtree holds keys strictly less than its own key and its right subtree holds keys greater than or equal to it, so equal keys always descend to the right. No rebalancing is performed — the shape of the tree is a pure function of the order in which keys are inserted, which also makes the pretty-printing traversal deterministic down to the byte.
//!
//! # Arenas
//! The trait used for defining the backing storage type is `Arena`. Implementing it directly isn't the only way to get your type to be supported by the tree — `ListArena` is a trait which allows you to define an arena in terms of a list-like collection, with `usize` indices.
//!
//! Since the search tree never removes nodes, the arena contract is *append-only*: an index handed out by the arena stays valid for as long as the arena exists. Several types from both the standard library and external crates already implement `Arena` and `ListArena` out of the box:
//! - [`Vec`] and [`VecDeque`] — `ListArena`, behind the `alloc` feature flag
//! - [`ArrayVec`] — `ListArena`, always available
//! - [`SmallVec`] — `ListArena`, behind the `smallvec` feature flag
//! - [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`] — `Arena`, behind the `slotmap` feature flag
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types.
//! - `unwind_safety` (**enabled by default**) — aborts the process instead of unwinding if a tree is caught in a corrupted state in debug builds, preventing unwinders from collecting corrupted data. Requires `std`.
//! - `alloc` (**enabled by default**) — adds `ListArena` trait implementations for standard library containers and enables the rendering module, which builds indentation prefixes on the heap. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.*
//! - `smallvec` — adds a `ListArena` trait implementation for [`SmallVec`].
//! - `slotmap` — adds `Arena` trait implementations for [`SlotMap`], [`HopSlotMap`] and [`DenseSlotMap`].
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//! - `slotmap` (*optional*) — `^0.4`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`HopSlotMap`]: https://docs.rs/slotmap/*/slotmap/hop/struct.HopSlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unsafe_derive_deserialize,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::filetype_is_file,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Arena, ListArena, DefaultArena};

pub mod search_tree;
#[doc(no_inline)]
pub use search_tree::SearchTree;

/// A prelude for using Boxwood, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Arena as TreeArena,
        ListArena as TreeListArena,
        DefaultArena as DefaultTreeArena,
    };
    #[doc(no_inline)]
    pub use crate::search_tree::{
        SearchTree,
        NodeRef as SearchTreeNodeRef,
    };
}

pub(crate) mod util;
