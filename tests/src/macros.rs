/// Expands each `async fn name(test: &mut DbTest)` into a `#[tokio::test]`
/// per enabled backend.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "sqlite")]
        mod sqlite {
            $(
                #[tokio::test]
                $( #[$attrs] )*
                async fn $f() {
                    let mut test = $crate::DbTest::sqlite();
                    super::$f(&mut test).await;
                }
            )*
        }

        #[cfg(feature = "mysql")]
        mod mysql {
            $(
                #[tokio::test]
                $( #[$attrs] )*
                async fn $f() {
                    let mut test = $crate::DbTest::mysql();
                    super::$f(&mut test).await;
                }
            )*
        }
    };
}
