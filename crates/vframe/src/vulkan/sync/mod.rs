pub use self::fence::Fence;

mod fence;
