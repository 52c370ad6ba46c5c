//! Definition macros for built-in components.

/// Implements [`Bind`](crate::factory::Bind) by cloning.
macro_rules! impl_bind_by_clone {
	($($ty:ty),* $(,)?) => {$(
		impl $crate::factory::Bind for $ty {
			fn bind(&self, _exec: &::std::sync::Arc<dyn $crate::executor::Executor>) -> Self {
				self.clone()
			}
		}
	)*};
}

/// Defines the parameter set and the factory of a built-in component.
///
/// For `factory! { Cg<V: Scalar>: LinOpFactory = "solver::Cg" { .. } { .. } }`
/// this generates:
///
/// - `CgParameters<V>` with public fields, `with_*` setters, `on` and `info`,
///   implementing [`FactoryBuilder<dyn LinOpFactory>`](crate::factory::FactoryBuilder)
/// - `CgFactory<V>` holding the executor and the bound parameters,
///   implementing [`LinOpFactory`](crate::factory::LinOpFactory)
///
/// Fields in the `optional` block are `Option`s whose setters take the inner
/// value.
macro_rules! factory {
	(
		$(#[$meta:meta])*
		$name:ident<$($param:ident: $bound:path),*>: $family:ident = $type_name:literal {
			value_type: $value_tag:expr,
			index_type: $index_tag:expr $(,)?
		}
		{
			$( $(#[$fmeta:meta])* $field:ident: $fty:ty = $default:expr ),* $(,)?
		}
		$( optional {
			$( $(#[$ometa:meta])* $ofield:ident: $oty:ty ),* $(,)?
		} )?
	) => {
		paste::paste! {
			#[doc = concat!("Parameters of [`", stringify!($name), "Factory`], usable as an unbound builder.")]
			#[derive(Debug, Clone, PartialEq)]
			pub struct [<$name Parameters>]<$($param: $bound),*> {
				$( $(#[$fmeta])* pub $field: $fty, )*
				$($( $(#[$ometa])* pub $ofield: Option<$oty>, )*)?
				_types: ::core::marker::PhantomData<fn() -> ($($param,)*)>,
			}

			impl<$($param: $bound),*> Default for [<$name Parameters>]<$($param),*> {
				fn default() -> Self {
					Self {
						$( $field: $default, )*
						$($( $ofield: None, )*)?
						_types: ::core::marker::PhantomData,
					}
				}
			}

			impl<$($param: $bound),*> [<$name Parameters>]<$($param),*> {
				$(
					pub fn [<with_ $field>](mut self, value: $fty) -> Self {
						self.$field = value;
						self
					}
				)*
				$($(
					pub fn [<with_ $ofield>](mut self, value: $oty) -> Self {
						self.$ofield = Some(value);
						self
					}
				)*)?

				pub fn info(&self) -> $crate::factory::FactoryInfo {
					$crate::factory::FactoryInfo {
						type_name: $type_name,
						value_type: $value_tag,
						index_type: $index_tag,
					}
				}

				/// Binds these parameters, and every deferred sub-factory, to `exec`.
				pub fn on(
					&self,
					exec: &::std::sync::Arc<dyn $crate::executor::Executor>,
				) -> ::std::sync::Arc<[<$name Factory>]<$($param),*>> {
					tracing::trace!(
						factory = %self.info(),
						executor = $crate::executor::Executor::name(exec.as_ref()),
						"binding"
					);
					::std::sync::Arc::new([<$name Factory>] {
						exec: ::std::sync::Arc::clone(exec),
						parameters: $crate::factory::Bind::bind(self, exec),
					})
				}
			}

			impl<$($param: $bound),*> $crate::factory::Bind for [<$name Parameters>]<$($param),*> {
				fn bind(&self, exec: &::std::sync::Arc<dyn $crate::executor::Executor>) -> Self {
					Self {
						$( $field: $crate::factory::Bind::bind(&self.$field, exec), )*
						$($( $ofield: $crate::factory::Bind::bind(&self.$ofield, exec), )*)?
						_types: ::core::marker::PhantomData,
					}
				}
			}

			impl<$($param: $bound),*> $crate::factory::FactoryBuilder<dyn $crate::factory::$family>
				for [<$name Parameters>]<$($param),*>
			{
				fn on(
					&self,
					exec: &::std::sync::Arc<dyn $crate::executor::Executor>,
				) -> ::std::sync::Arc<dyn $crate::factory::$family> {
					[<$name Parameters>]::on(self, exec)
				}

				fn info(&self) -> $crate::factory::FactoryInfo {
					[<$name Parameters>]::info(self)
				}

				fn as_any(&self) -> &dyn ::std::any::Any {
					self
				}

				fn dyn_eq(&self, other: &dyn $crate::factory::FactoryBuilder<dyn $crate::factory::$family>) -> bool {
					other.as_any().downcast_ref::<Self>().is_some_and(|other| other == self)
				}
			}

			$(#[$meta])*
			pub struct [<$name Factory>]<$($param: $bound),*> {
				exec: ::std::sync::Arc<dyn $crate::executor::Executor>,
				parameters: [<$name Parameters>]<$($param),*>,
			}

			impl<$($param: $bound),*> [<$name Factory>]<$($param),*> {
				pub fn build() -> [<$name Parameters>]<$($param),*> {
					Default::default()
				}

				/// Parameters with every sub-factory bound.
				pub fn parameters(&self) -> &[<$name Parameters>]<$($param),*> {
					&self.parameters
				}
			}

			impl<$($param: $bound),*> ::core::fmt::Debug for [<$name Factory>]<$($param),*> {
				fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
					f.debug_struct(stringify!([<$name Factory>]))
						.field("executor", &$crate::executor::Executor::name(self.exec.as_ref()))
						.field("parameters", &self.parameters)
						.finish()
				}
			}

			impl<$($param: $bound),*> $crate::factory::AbstractFactory for [<$name Factory>]<$($param),*> {
				fn executor(&self) -> &::std::sync::Arc<dyn $crate::executor::Executor> {
					&self.exec
				}

				fn info(&self) -> $crate::factory::FactoryInfo {
					self.parameters.info()
				}

				fn as_any(&self) -> &dyn ::std::any::Any {
					self
				}

				fn into_any(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<dyn ::std::any::Any + Send + Sync> {
					self
				}
			}

			impl<$($param: $bound),*> $crate::factory::$family for [<$name Factory>]<$($param),*> {}
		}
	};
}
