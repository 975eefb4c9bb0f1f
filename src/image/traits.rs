/// Row-by-row read access to a borrowed pixel buffer.
///
/// Implementors only need `row`; whole-image passes go through
/// [`fold_pixels`](ImageView::fold_pixels), which walks the backing slice in
/// one pass when there is no row padding.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Pixels of row `y`, without padding.
    fn row(&self, y: usize) -> &[Self::Pixel];

    /// The whole image as one slice, if rows are packed back to back.
    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            image: self,
            next: 0,
        }
    }

    /// Fold every pixel in row-major order.
    fn fold_pixels<A, F>(&self, init: A, mut f: F) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Pixel) -> A,
    {
        match self.as_slice() {
            Some(all) => all.iter().fold(init, |acc, &p| f(acc, p)),
            None => self
                .rows()
                .fold(init, |acc, row| row.iter().fold(acc, |acc, &p| f(acc, p))),
        }
    }
}

/// Iterator over the rows of an [`ImageView`], top to bottom.
pub struct Rows<'a, I: ImageView> {
    image: &'a I,
    next: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.next;
        if y >= self.image.height() {
            return None;
        }
        self.next += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<I: ImageView> ExactSizeIterator for Rows<'_, I> {}
