//! Enumerated and bitmask operands.
//!
//! Values follow the SPIR-V unified registry. Only the subset the assembler
//! and dump need is declared; unknown words decode to `None` and are dumped
//! as plain numbers.

word_enum! {
    /// Optional feature the program requires from its executor.
    pub enum Capability: u32 {
        Matrix = 0,
        Shader = 1,
        Geometry = 2,
        Tessellation = 3,
        Addresses = 4,
        Linkage = 5,
        Kernel = 6,
        Float16 = 9,
        Float64 = 10,
        Int64 = 11,
        Int16 = 22,
        ImageGatherExtended = 25,
        StorageImageMultisample = 27,
        ClipDistance = 32,
        CullDistance = 33,
        ImageCubeArray = 34,
        SampleRateShading = 35,
        Int8 = 39,
        InputAttachment = 40,
        SparseResidency = 41,
        MinLod = 42,
        Sampled1D = 43,
        Image1D = 44,
        SampledCubeArray = 45,
        SampledBuffer = 46,
        ImageBuffer = 47,
        StorageImageExtendedFormats = 49,
        ImageQuery = 50,
        DerivativeControl = 51,
        TransformFeedback = 53,
        GeometryStreams = 54,
        StorageImageReadWithoutFormat = 55,
        StorageImageWriteWithoutFormat = 56,
        MultiViewport = 57,
    }
}

word_enum! {
    pub enum AddressingModel: u32 {
        Logical = 0,
        Physical32 = 1,
        Physical64 = 2,
    }
}

word_enum! {
    pub enum MemoryModel: u32 {
        Simple = 0,
        GLSL450 = 1,
        OpenCL = 2,
        Vulkan = 3,
    }
}

word_enum! {
    /// Pipeline stage an entry point runs in.
    pub enum ExecutionModel: u32 {
        Vertex = 0,
        TessellationControl = 1,
        TessellationEvaluation = 2,
        Geometry = 3,
        Fragment = 4,
        GLCompute = 5,
        Kernel = 6,
    }
}

word_enum! {
    pub enum ExecutionMode: u32 {
        Invocations = 0,
        SpacingEqual = 1,
        OriginUpperLeft = 7,
        OriginLowerLeft = 8,
        EarlyFragmentTests = 9,
        PointMode = 10,
        Xfb = 11,
        DepthReplacing = 12,
        DepthGreater = 14,
        DepthLess = 15,
        DepthUnchanged = 16,
        LocalSize = 17,
        LocalSizeHint = 18,
        InputPoints = 19,
        Triangles = 22,
        OutputVertices = 26,
        OutputPoints = 27,
        OutputTriangleStrip = 29,
    }
}

word_enum! {
    pub enum StorageClass: u32 {
        UniformConstant = 0,
        Input = 1,
        Uniform = 2,
        Output = 3,
        Workgroup = 4,
        CrossWorkgroup = 5,
        Private = 6,
        Function = 7,
        Generic = 8,
        PushConstant = 9,
        AtomicCounter = 10,
        Image = 11,
        StorageBuffer = 12,
    }
}

word_enum! {
    pub enum Decoration: u32 {
        RelaxedPrecision = 0,
        SpecId = 1,
        Block = 2,
        BufferBlock = 3,
        RowMajor = 4,
        ColMajor = 5,
        ArrayStride = 6,
        MatrixStride = 7,
        BuiltIn = 11,
        NoPerspective = 13,
        Flat = 14,
        Patch = 15,
        Centroid = 16,
        Sample = 17,
        Invariant = 18,
        Restrict = 19,
        Aliased = 20,
        Volatile = 21,
        Coherent = 23,
        NonWritable = 24,
        NonReadable = 25,
        Location = 30,
        Component = 31,
        Index = 32,
        Binding = 33,
        DescriptorSet = 34,
        Offset = 35,
    }
}

word_enum! {
    /// Built-in variable selected by a `BuiltIn` decoration.
    pub enum BuiltIn: u32 {
        Position = 0,
        PointSize = 1,
        ClipDistance = 3,
        CullDistance = 4,
        VertexId = 5,
        InstanceId = 6,
        PrimitiveId = 7,
        InvocationId = 8,
        Layer = 9,
        ViewportIndex = 10,
        TessLevelOuter = 11,
        TessLevelInner = 12,
        TessCoord = 13,
        PatchVertices = 14,
        FragCoord = 15,
        PointCoord = 16,
        FrontFacing = 17,
        SampleId = 18,
        SamplePosition = 19,
        SampleMask = 20,
        FragDepth = 22,
        HelperInvocation = 23,
        NumWorkgroups = 24,
        WorkgroupSize = 25,
        WorkgroupId = 26,
        LocalInvocationId = 27,
        GlobalInvocationId = 28,
        LocalInvocationIndex = 29,
        VertexIndex = 42,
        InstanceIndex = 43,
    }
}

word_enum! {
    pub enum Dim: u32 {
        Dim1D = 0,
        Dim2D = 1,
        Dim3D = 2,
        Cube = 3,
        Rect = 4,
        Buffer = 5,
        SubpassData = 6,
    }
}

word_enum! {
    pub enum ImageFormat: u32 {
        Unknown = 0,
        Rgba32f = 1,
        Rgba16f = 2,
        R32f = 3,
        Rgba8 = 4,
        Rgba8Snorm = 5,
        Rg32f = 6,
        Rg16f = 7,
        R32i = 24,
        R32ui = 33,
    }
}

mask_type! {
    pub struct FunctionControl {
        INLINE = 0x1 => "Inline",
        DONT_INLINE = 0x2 => "DontInline",
        PURE = 0x4 => "Pure",
        CONST = 0x8 => "Const",
    }
}

mask_type! {
    pub struct SelectionControl {
        FLATTEN = 0x1 => "Flatten",
        DONT_FLATTEN = 0x2 => "DontFlatten",
    }
}

mask_type! {
    pub struct LoopControl {
        UNROLL = 0x1 => "Unroll",
        DONT_UNROLL = 0x2 => "DontUnroll",
    }
}

mask_type! {
    /// Memory operand mask for loads and stores.
    pub struct MemoryAccess {
        VOLATILE = 0x1 => "Volatile",
        ALIGNED = 0x2 => "Aligned",
        NONTEMPORAL = 0x4 => "Nontemporal",
    }
}
