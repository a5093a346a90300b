/// Read access to a toplevel window or dialog.
pub trait WindowGeometry {
    fn is_maximized(&self) -> bool;
    /// `(width, height)`
    fn size(&self) -> (i32, i32);
    /// `(x, y)`
    fn position(&self) -> (i32, i32);
}

/// Write access used when restoring a saved layout.
pub trait WindowPlacement {
    fn resize(&mut self, width: i32, height: i32);
    fn move_to(&mut self, x: i32, y: i32);
    fn maximize(&mut self);
}
