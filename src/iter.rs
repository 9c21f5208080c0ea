use core::iter::FusedIterator;

pub struct Iter<'a, R>(Option<&'a R>);

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(value: Option<&'a R>) -> Self {
        Iter(value)
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.is_some() as usize;
        (len, Some(len))
    }
}

impl<'a, R> DoubleEndedIterator for Iter<'a, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.take()
    }
}

impl<'a, R> ExactSizeIterator for Iter<'a, R> {}

impl<'a, R> FusedIterator for Iter<'a, R> {}

impl<'a, R> Clone for Iter<'a, R> {
    fn clone(&self) -> Self {
        Iter(self.0)
    }
}

pub struct IntoIter<R>(Option<R>);

impl<R> IntoIter<R> {
    pub(crate) fn new(value: Option<R>) -> Self {
        IntoIter(value)
    }
}

impl<R> Iterator for IntoIter<R> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.is_some() as usize;
        (len, Some(len))
    }
}

impl<R> DoubleEndedIterator for IntoIter<R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.take()
    }
}

impl<R> ExactSizeIterator for IntoIter<R> {}

impl<R> FusedIterator for IntoIter<R> {}

#[cfg(test)]
mod tests {
    use crate::lift::IntoEither;

    #[test]
    fn into_iter_drains_the_right_payload() {
        let mut iter = 10.0.as_right::<&str>().into_iter();

        assert_eq!((1, Some(1)), iter.size_hint());
        assert_eq!(Some(10.0), iter.next());
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn into_iter_is_empty_for_left() {
        let mut iter = "bad".as_left::<f64>().into_iter();

        assert_eq!((0, Some(0)), iter.size_hint());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn borrowing_iteration_works_in_for_loops() {
        let value = 10.0.as_right::<&str>();

        let mut total = 0.0;
        for x in &value {
            total += x;
        }
        for x in &value {
            total += x;
        }

        assert_eq!(20.0, total);
    }
}
