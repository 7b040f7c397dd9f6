/// A macro to build the argument list of a query template.
///
/// Every expression is converted with `Value::from`, so anything with a `From` impl for
/// [`Value`](crate::types::Value) can be mixed in one list.
///
/// # Example
///
/// ```
/// use rusql_template::prelude::*;
///
/// let args = args!["Jack", 42, 1.5, true, None::<i32>, vec!["a", "b"], skip()];
/// assert_eq!(args.len(), 7);
/// assert_eq!(args[4], Value::Null);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::types::Value>::new()
    };

    ($($value:expr),+ $(,)?) => {
        {
            let mut args = ::std::vec::Vec::<$crate::types::Value>::new();
            $(
                args.push($crate::types::Value::from($value));
            )+
            args
        }
    };
}
