fn main ()
{
    use ::yield_gen::prelude::*;

    #[generator(u8)]
    fn countdown (count: u8)
    {
        let mut current = count;
        while let Some(next) = current.checked_sub(1) {
            yield_!(current);
            current = next;
        }
    }

    let mut generator = countdown(3);
    assert_eq!(generator.next(), Some(3));
    assert_eq!(generator.next(), Some(2));
    assert_eq!(generator.next(), Some(1));
    assert_eq!(generator.next(), None);

    for n in countdown(10) {
        println!("{}…", n);
        if n == 5 {
            // Dropping the generator stops the countdown.
            break;
        }
    }
}
