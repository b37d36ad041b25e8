use crate::domain::{ContainerInfo, FileRow};
use crate::read::container::Container;

pub fn list(container: &Container) -> Vec<FileRow> {
    container
        .files()
        .iter()
        .enumerate()
        .map(|(ordinal, fe)| FileRow {
            ordinal,
            name: fe.name().into_owned(),
            file_size: fe.file_size(),
            chunk_size: fe.chunk_size(),
            start_offset: fe.start_offset(),
            signature: hex::encode(fe.descriptor.signature),
            data: hex::encode(fe.descriptor.data),
        })
        .collect()
}

pub fn info(container: &Container) -> ContainerInfo {
    let root = container.root();
    ContainerInfo {
        name: root.name.decode().into_owned(),
        entries: root.index,
        declared_blocks: root.file_size,
        declared_size: container.declared_size(),
        data_start: container.data_start(),
        computed_size: container.computed_size(),
        buffer_size: container.len_bytes(),
        size_consistent: container.declared_size() == container.computed_size(),
    }
}
