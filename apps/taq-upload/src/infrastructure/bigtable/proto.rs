//! `google.bigtable.v2` Bindings
//!
//! Hand-maintained prost/tonic bindings for the subset of the Bigtable
//! data API this tool uses: the unary `MutateRow` RPC and its request
//! and response messages. Field numbers and the RPC path match the
//! published `google/bigtable/v2/bigtable.proto`.

/// Request message for `Bigtable.MutateRow`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MutateRowRequest {
    /// The unique name of the table to which the mutation should be
    /// applied, of the form
    /// `projects/<project>/instances/<instance>/tables/<table>`.
    #[prost(string, tag = "1")]
    pub table_name: ::prost::alloc::string::String,
    /// This value specifies routing for replication. Left empty to use
    /// the default application profile.
    #[prost(string, tag = "4")]
    pub app_profile_id: ::prost::alloc::string::String,
    /// The key of the row to which the mutation should be applied.
    #[prost(bytes = "vec", tag = "2")]
    pub row_key: ::prost::alloc::vec::Vec<u8>,
    /// Changes to be atomically applied to the specified row. Entries
    /// are applied in order and must not be empty.
    #[prost(message, repeated, tag = "3")]
    pub mutations: ::prost::alloc::vec::Vec<Mutation>,
}

/// Response message for `Bigtable.MutateRow`.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct MutateRowResponse {}

/// A particular change to be made to the contents of a row.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Mutation {
    /// Which of the possible Mutation types to apply.
    #[prost(oneof = "mutation::Mutation", tags = "1")]
    pub mutation: ::core::option::Option<mutation::Mutation>,
}

/// Nested message and enum types in `Mutation`.
pub mod mutation {
    /// A mutation which sets the value of the specified cell.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SetCell {
        /// The name of the family into which new data should be written.
        #[prost(string, tag = "1")]
        pub family_name: ::prost::alloc::string::String,
        /// The qualifier of the column into which new data should be
        /// written.
        #[prost(bytes = "vec", tag = "2")]
        pub column_qualifier: ::prost::alloc::vec::Vec<u8>,
        /// The timestamp of the cell into which new data should be
        /// written, in microseconds. `-1` means "use the current server
        /// time".
        #[prost(int64, tag = "3")]
        pub timestamp_micros: i64,
        /// The value to be written into the specified cell.
        #[prost(bytes = "vec", tag = "4")]
        pub value: ::prost::alloc::vec::Vec<u8>,
    }

    /// Which of the possible Mutation types to apply.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Mutation {
        /// Set a cell's value.
        #[prost(message, tag = "1")]
        SetCell(SetCell),
    }
}

/// Client for the Bigtable data API.
pub mod bigtable_client {
    use tonic::codegen::http::uri::PathAndQuery;
    use tonic::codegen::GrpcMethod;
    use tonic::transport::Channel;

    /// Service for reading from and writing to existing Bigtable tables.
    #[derive(Debug, Clone)]
    pub struct BigtableClient {
        inner: tonic::client::Grpc<Channel>,
    }

    impl BigtableClient {
        /// Wrap an established channel.
        pub fn new(channel: Channel) -> Self {
            Self {
                inner: tonic::client::Grpc::new(channel),
            }
        }

        /// Mutates a row atomically. Cells already present in the row are
        /// left unchanged unless explicitly changed by the mutation.
        ///
        /// # Errors
        ///
        /// Returns the gRPC [`tonic::Status`] when the transport is not
        /// ready or the server rejects the mutation.
        pub async fn mutate_row(
            &mut self,
            request: impl tonic::IntoRequest<super::MutateRowRequest>,
        ) -> Result<tonic::Response<super::MutateRowResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {e}"))
            })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = PathAndQuery::from_static("/google.bigtable.v2.Bigtable/MutateRow");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("google.bigtable.v2.Bigtable", "MutateRow"));
            self.inner.unary(req, path, codec).await
        }
    }
}
